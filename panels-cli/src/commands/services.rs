use anyhow::{Context, Result, bail};
use panels::settings::SettingsStore;

pub fn services(store: &SettingsStore, move_service: Option<&[usize]>) -> Result<()> {
    let mut settings = store.load().context("failed to load settings")?;

    if let Some(&[from, to]) = move_service {
        let mut list = settings.service_list();
        let len = list.values().len();
        if from >= len || to >= len {
            bail!("there are {} services, cannot move {} to {}", len, from, to);
        }
        if let Some(order) = list.move_value(from, to) {
            log::info!("Service preference changed");
            settings.service_preference = order;
            store.save(&settings).context("failed to save settings")?;
        }
    }

    for (index, service) in settings.service_preference.iter().enumerate() {
        println!("{:>3}  {}", index, service);
    }
    Ok(())
}
