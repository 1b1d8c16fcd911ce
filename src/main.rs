//! Interactive menu driver for the library catalog.

use std::io;

use library_catalog::{
    Library,
    menu,
    observers::{ConsoleNotifier, TransferLogger},
};

fn main() -> io::Result<()> {
    env_logger::init();

    let mut library = Library::new();
    library.register_observer(Box::new(TransferLogger));
    library.register_observer(Box::new(ConsoleNotifier));

    let stdin = io::stdin();
    let stdout = io::stdout();
    menu::run(&mut library, &mut stdin.lock(), &mut stdout.lock())?;

    log::info!("session ended with {library}");
    Ok(())
}
