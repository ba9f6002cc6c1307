use anyhow::Result;
use autolink::{locator::list_instances, platform::SystemRegistry, Config};

pub fn cmd_list(config: &Config) -> Result<()> {
    let registry = SystemRegistry::new();
    let instances = list_instances(&registry, &config.host.registration_prefix)?;
    if instances.is_empty() {
        eprintln!("No running instance has a resource open");
    }
    for (name, resource) in instances {
        println!("{name}\t{resource}");
    }
    Ok(())
}
