//! Interactive numeric menu driving a [`Library`].
//!
//! The loop is generic over `BufRead`/`Write` so whole sessions can be
//! scripted in tests; the binary wires it to locked stdin/stdout.

use std::io::{self, BufRead, Write};

use crate::{library::Library, title::Title};

/// One of the six menu selections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    /// 1. Add a book to the catalog
    AddBook,
    /// 2. Borrow a book by title
    BorrowBook,
    /// 3. Return the earliest-borrowed book
    ReturnBook,
    /// 4. List available books
    ViewAvailable,
    /// 5. List borrowed books
    ViewBorrowed,
    /// 6. Leave the menu
    Exit,
}

impl MenuChoice {
    /// Parse a menu selection from one line of input
    fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "1" => Some(Self::AddBook),
            "2" => Some(Self::BorrowBook),
            "3" => Some(Self::ReturnBook),
            "4" => Some(Self::ViewAvailable),
            "5" => Some(Self::ViewBorrowed),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Render the menu and the choice prompt
fn print_menu<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "|----------------------------------|")?;
    writeln!(output, "|------- Library Menu --------|")?;
    writeln!(output, "1. Add book")?;
    writeln!(output, "2. Borrow book")?;
    writeln!(output, "3. Return book")?;
    writeln!(output, "4. View available books")?;
    writeln!(output, "5. View borrowed books")?;
    writeln!(output, "6. Exit")?;
    write!(output, "Choice: ")?;
    output.flush()
}

/// Read one line, stripping the trailing newline; `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// Prompt for and read a book title; `None` at end of input
fn prompt_title<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<Title>> {
    write!(output, "{prompt}")?;
    output.flush()?;
    Ok(read_line(input)?.map(Title::new))
}

/// Render a listing, or the given message when it is empty
fn render_listing<W: Write>(
    output: &mut W,
    heading: &str,
    empty_message: &str,
    titles: &[Title],
) -> io::Result<()> {
    if titles.is_empty() {
        return writeln!(output, "{empty_message}");
    }
    writeln!(output, "{heading}")?;
    for title in titles {
        writeln!(output, "- {title}")?;
    }
    Ok(())
}

/// Run the menu loop until the user exits or input ends.
///
/// Every library failure is rendered as a message and the menu is shown
/// again; nothing here aborts the process.
///
/// # Errors
///
/// Returns any I/O error raised while reading input or writing output.
pub fn run<R: BufRead, W: Write>(
    library: &mut Library,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    loop {
        print_menu(output)?;
        let Some(line) = read_line(input)? else {
            break;
        };
        let Some(choice) = MenuChoice::parse(&line) else {
            writeln!(output, "Invalid choice. Please try again.")?;
            continue;
        };
        match choice {
            MenuChoice::AddBook => {
                let Some(title) = prompt_title(input, output, "Enter the book title: ")? else {
                    break;
                };
                library.add_book(title);
            }
            MenuChoice::BorrowBook => {
                let Some(title) =
                    prompt_title(input, output, "Enter the book title to borrow: ")?
                else {
                    break;
                };
                if let Err(err) = library.borrow_book(&title) {
                    writeln!(output, "{err}")?;
                }
            }
            MenuChoice::ReturnBook => {
                if let Err(err) = library.return_book() {
                    writeln!(output, "{err}")?;
                }
            }
            MenuChoice::ViewAvailable => {
                render_listing(
                    output,
                    "Available books:",
                    "There are no available books.",
                    &library.list_available(),
                )?;
            }
            MenuChoice::ViewBorrowed => {
                render_listing(
                    output,
                    "Borrowed books:",
                    "There are no borrowed books.",
                    &library.list_borrowed(),
                )?;
            }
            MenuChoice::Exit => {
                writeln!(output, "Exiting the system.")?;
                break;
            }
        }
    }
    Ok(())
}
