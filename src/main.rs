use anyhow::{Context, Result};
use env_logger::Builder;
use log::LevelFilter;

use ebi_rational::{Rational, RationalError, r};

pub fn main() -> Result<()> {
    Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("ebi_rational demonstration starting");

    let a = Rational::new(1, 2).context("constructing a")?;
    let b = Rational::new(3, -4).context("constructing b")?;
    println!("a = {}, b = {}", a, b);

    println!("a + b = {}", a + b);
    println!("a - b = {}", a - b);
    println!("a * b = {}", a * b);
    println!("a / b = {}", a.checked_div(&b)?);
    println!("3 + a = {}, a * 3 = {}, 2 * a = {}", 3 + a, a * 3, 2 * a);
    println!("+a = {}, -b = {}", a.pos(), -b);

    let mut c = a;
    c += b;
    c *= 4;
    println!("(a + b) * 4 = {}", c);

    let mut d = Rational::new(3, 2)?;
    let previous = d.post_increment();
    println!("d++ returns {}, d is now {}", previous, d);
    println!("++d returns {}", d.pre_increment());
    let previous = d.post_decrement();
    println!("d-- returns {}, d is now {}", previous, d);
    println!("--d returns {}", d.pre_decrement());

    let third = Rational::new(1, 3)?;
    println!(
        "1/3 as f64 = {}, as f32 = {}, 7/2 as integer = {}, -7/2 as integer = {}",
        third.to_f64(),
        third.to_f32(),
        Rational::new(7, 2)?.to_integer(),
        Rational::new(-7, 2)?.to_integer()
    );

    println!(
        "a == 2/4: {}, b < a: {}, a <= b: {}, a != b: {}",
        a == Rational::new(2, 4)?,
        b < a,
        a <= b,
        a != b
    );

    println!("literal: 5 -> {}", r(5));

    match Rational::new(1, 0) {
        Ok(value) => println!("unexpectedly constructed {}", value),
        Err(err) => println!("1/0 rejected: {}", err),
    }

    let zero = Rational::new(0, 5)?;
    if let Err(RationalError::DivideByZeroOperand) = a.checked_div(&zero) {
        println!("{} / {} rejected: {}", a, zero, RationalError::DivideByZeroOperand);
    }

    log::info!("ebi_rational demonstration done");
    Ok(())
}
