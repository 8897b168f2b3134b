use anyhow::{Context, Result, bail};
use panels::settings::SettingsStore;
use panels::table::{TableName, TableOptions};

fn print_columns(table: TableName, options: &TableOptions) {
    println!(
        "{} (sorted by {} {:?})",
        table, options.sort_key, options.sort_direction
    );
    for (index, column) in options.columns.iter().enumerate() {
        let visibility = if column.is_visible { "shown" } else { "hidden" };
        let pinned = if column.is_modifiable { "" } else { " pinned" };
        println!("{:>3}  {:<28}{}{}", index, column.name, visibility, pinned);
    }
}

pub fn columns(store: &SettingsStore, table: TableName) -> Result<()> {
    let settings = store.load().context("failed to load settings")?;
    print_columns(table, settings.tables.get(table));
    Ok(())
}

pub fn move_column(store: &SettingsStore, table: TableName, from: usize, to: usize) -> Result<()> {
    let mut settings = store.load().context("failed to load settings")?;
    let options = settings.tables.get_mut(table);
    let count = options.columns.len();
    if from >= count || to >= count {
        bail!("{} has {} columns, cannot move {} to {}", table, count, from, to);
    }
    if !options.move_column(from, to) {
        bail!("column {} of {} cannot be moved to {}", from, table, to);
    }
    log::info!("Moved column {} of {} to {}", from, table, to);

    print_columns(table, settings.tables.get(table));
    store.save(&settings).context("failed to save settings")?;
    Ok(())
}
