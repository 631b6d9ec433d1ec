use std::io;

use stockroom_cli::{Session, Settings, load_or_empty};

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let settings = Settings::from_env();
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    let inventory = load_or_empty(&settings.data_file, &mut out, &mut err)?;

    let mut session = Session::new(inventory, io::stdin().lock(), out, err);
    session.run()
}
