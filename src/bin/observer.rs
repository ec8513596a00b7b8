use std::rc::Rc;

use colored::Colorize;
use design_patterns::logging;
use design_patterns::observer::{Customer, Item, Subject};

fn main() {
    logging::init();

    println!("{}", "=== Observer Demo ===".bold());

    let mut shirt_item = Item::new("Nike Shirt");

    let observer_first = Rc::new(Customer::new("abc@gmail.com"));
    let observer_second = Rc::new(Customer::new("xyz@gmail.com"));

    shirt_item.register(observer_first);
    shirt_item.register(observer_second);

    shirt_item.update_availability();
}
