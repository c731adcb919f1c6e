//! Contact command - print direct contact details

use crate::cli::style::{bullet, hyperlink, Stream, Stylize};
use anstream::println;
use folio::profile::{mailto, tel, EMAIL, LOCATION, PHONE, SOCIAL_LINKS};

/// Run the contact command (default when no subcommand given)
pub fn run_contact() {
    println!("{}", "Contact Information".emphasis());
    println!();
    println!(
        "  {} {}",
        format!("{:<9}", "Email").muted(),
        hyperlink(Stream::Stdout, &mailto(), EMAIL)
    );
    println!(
        "  {} {}",
        format!("{:<9}", "Phone").muted(),
        hyperlink(Stream::Stdout, &tel(), PHONE)
    );
    println!("  {} {}", format!("{:<9}", "Location").muted(), LOCATION);
    println!();
    println!("{}", "Connect With Me".emphasis());
    for social in &SOCIAL_LINKS {
        println!(
            "  {} {:<10} {}",
            bullet(),
            social.network,
            hyperlink(Stream::Stdout, social.url, social.url)
        );
    }
    println!();
    println!(
        "{}",
        "Send a message with: folio send --name <name> --email <email> --message <text>".muted()
    );
}
