use colored::Colorize;
use design_patterns::factory_method::{get_gun, Gun};
use design_patterns::logging;

fn print_details(gun: &dyn Gun) {
    println!("Gun: {}", gun.name());
    println!("Power: {}", gun.power());
}

fn main() -> Result<(), design_patterns::Error> {
    logging::init();

    println!("{}", "=== Factory Method Demo ===".bold());

    let ak47 = get_gun("AK47")?;
    let m16 = get_gun("M16")?;

    if let Err(err) = get_gun("BAZOOKA") {
        println!("{}", err.to_string().red());
    }

    print_details(ak47.as_ref());
    print_details(m16.as_ref());

    Ok(())
}
