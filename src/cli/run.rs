use super::*;
use crate::{
    cli::{
        command::Cli,
        menu::{CHOOSE_OPTION, MAIN_MENU, MenuChoice, PageNav, VIEW_MENU, ViewChoice},
    },
    domain::PhoneBook,
    store::CsvStore,
};
use std::io;

pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let book = PhoneBook::new(Box::new(CsvStore::new(&cli.file)));
    book.ensure_initialized()?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    run_session(&book, &mut input, &mut output)
}

/// Interactive menu loop. Returns when the user exits or input runs out.
pub fn run_session(
    book: &PhoneBook,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<(), AppError> {
    loop {
        writeln!(output, "{}", MAIN_MENU)?;
        let Some(action) = ask(input, output, CHOOSE_OPTION)? else {
            log::debug!("Input closed, leaving the phone book");
            return Ok(());
        };

        match action.parse::<MenuChoice>() {
            Ok(MenuChoice::View) => show_phonebook(book, input, output)?,
            Ok(MenuChoice::AddOrUpdate) => add_or_update(book, input, output)?,
            Ok(MenuChoice::BulkImport) => bulk_import(book, input, output)?,
            Ok(MenuChoice::Delete) => delete_entry(book, input, output)?,
            Ok(MenuChoice::Exit) => {
                writeln!(output, "Goodbye!")?;
                return Ok(());
            }
            Err(e) => {
                log::debug!("{e}");
                writeln!(output, "Invalid option, please try again.")?;
            }
        }
    }
}

fn show_phonebook(
    book: &PhoneBook,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<(), AppError> {
    writeln!(output, "{}", VIEW_MENU)?;
    let Some(choice) = ask(input, output, CHOOSE_OPTION)? else {
        return Ok(());
    };

    match choice.parse::<ViewChoice>() {
        Ok(ViewChoice::ShowAll) => display_records(output, &book.list_all()?),
        Ok(ViewChoice::Filter) => {
            let Some(pattern) = ask(input, output, "Enter search pattern: ")? else {
                return Ok(());
            };
            display_records(output, &book.search(&pattern)?)
        }
        Ok(ViewChoice::Paginated) => paginated_view(book, input, output),
        // Unknown view option falls back to the main menu
        Err(e) => {
            log::debug!("{e}");
            Ok(())
        }
    }
}

fn paginated_view(
    book: &PhoneBook,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<(), AppError> {
    let Some(raw) = ask(input, output, "Records per page: ")? else {
        return Ok(());
    };

    let limit = match get_input_as_usize(&raw) {
        Ok(0) => {
            let err = AppError::Validation("Page size must be greater than zero".to_string());
            writeln!(output, "{err}")?;
            return Ok(());
        }
        Ok(limit) => limit,
        Err(e) => {
            writeln!(output, "{e}")?;
            return Ok(());
        }
    };

    let mut offset = 0;
    loop {
        let records = book.paginate(limit, offset)?;
        if records.is_empty() {
            writeln!(output, "No more records.")?;
            return Ok(());
        }

        display_records(output, &records)?;
        writeln!(output, "\nPage {}", offset / limit + 1)?;

        let Some(key) = ask(input, output, "Next (n), Previous (p), Quit (q): ")? else {
            return Ok(());
        };

        match PageNav::from(key.as_str()).apply(offset, limit) {
            Some(next) => offset = next,
            None => return Ok(()),
        }
    }
}

fn add_or_update(
    book: &PhoneBook,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<(), AppError> {
    let Some(name) = ask(input, output, "Enter name: ")? else {
        return Ok(());
    };
    let Some(phone) = ask(input, output, "Enter phone: ")? else {
        return Ok(());
    };

    let outcome = book.upsert(&name, &phone)?;
    writeln!(output, "Record {} successfully!", outcome)?;
    Ok(())
}

fn bulk_import(
    book: &PhoneBook,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<(), AppError> {
    writeln!(
        output,
        "Enter name and phone pairs (leave name blank to finish):"
    )?;

    let mut entries = Vec::new();
    loop {
        let name = ask(input, output, "Name: ")?.unwrap_or_default();
        if name.is_empty() {
            break;
        }
        let phone = ask(input, output, "Phone: ")?.unwrap_or_default();
        entries.push((name, phone));
    }

    let submitted = entries.len();
    let rejected = book.bulk_insert(entries)?;

    if !rejected.is_empty() {
        writeln!(output, "\nInvalid entries:")?;
        for entry in &rejected {
            writeln!(output, "{}", entry)?;
        }
    }
    writeln!(
        output,
        "\nSuccessfully processed {} entries",
        submitted - rejected.len()
    )?;
    Ok(())
}

fn delete_entry(
    book: &PhoneBook,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<(), AppError> {
    let Some(value) = ask(input, output, "Enter name or phone to delete: ")? else {
        return Ok(());
    };

    let count = book.delete_by_name_or_phone(&value)?;
    writeln!(output, "Deleted {} records", count)?;
    Ok(())
}
