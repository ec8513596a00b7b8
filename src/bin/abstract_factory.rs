use colored::Colorize;
use design_patterns::abstract_factory::{get_sports_factory, SportsFactory};
use design_patterns::logging;

fn print_catalogue(factory: &dyn SportsFactory) {
    let shoe = factory.make_shoe();
    let shirt = factory.make_shirt();

    println!("{} shoe  -> logo: {}, size: {}", factory.brand(), shoe.logo(), shoe.size());
    println!("{} shirt -> logo: {}, size: {}", factory.brand(), shirt.logo(), shirt.size());
}

fn main() {
    logging::init();

    println!("{}", "=== Abstract Factory Demo ===".bold());

    for brand in ["adidas", "nike", "puma"] {
        match get_sports_factory(brand) {
            Ok(factory) => print_catalogue(factory.as_ref()),
            Err(err) => println!("{}", err.to_string().red()),
        }
    }
}
