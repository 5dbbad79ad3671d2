//! Generates `int-decimal/src/itoa/places.rs`, the decimal place tables used for digit
//! extraction in each unsigned width.
//!
//! Usage: `cargo run -p int-decimal-dev [OUTPUT]`

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use proc_macro2::{Ident, Literal, Span, TokenStream};
use quote::quote;

const DEFAULT_OUTPUT: &str = "int-decimal/src/itoa/places.rs";

const HEADER: &str = "\
// This file was generated by int-decimal-dev. Do not edit it by hand.

#![allow(clippy::unreadable_literal)]

";

fn main() -> Result<()> {
    let output = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let widths = widths();
    let mut tables = Vec::with_capacity(widths.len());
    for (name, (ty, max)) in &widths {
        let places = places(*max)?;
        println!("{}: {} places, top {}", name, places.len(), places[0]);
        tables.push(table(name, ty, &places).to_string());
    }

    // rustfmt keeps the blank lines between tables but does not add them.
    let source = format!("{}{}\n", HEADER, tables.join("\n\n"));
    fs::write(&output, source).with_context(|| format!("writing {}", output.display()))?;
    rustfmt(&output)?;
    println!("wrote {}", output.display());
    Ok(())
}

/// The width chain, narrowest first, with each width's maximum value.
fn widths() -> IndexMap<&'static str, (&'static str, u128)> {
    let mut widths = IndexMap::new();
    widths.insert("U8", ("u8", u8::MAX as u128));
    widths.insert("U16", ("u16", u16::MAX as u128));
    widths.insert("U32", ("u32", u32::MAX as u128));
    widths.insert("U64", ("u64", u64::MAX as u128));
    widths.insert("U128", ("u128", u128::MAX));
    widths
}

/// Powers of ten from the largest one not above `max` down to ten.
fn places(max: u128) -> Result<Vec<u128>> {
    if max < 10 {
        bail!("a width with maximum {} has no place above the units", max);
    }
    let mut place = 1u128;
    while place <= max / 10 {
        place *= 10;
    }
    let mut places = Vec::new();
    while place >= 10 {
        places.push(place);
        place /= 10;
    }
    Ok(places)
}

fn table(name: &str, ty: &str, places: &[u128]) -> TokenStream {
    let ident = Ident::new(&format!("{}_PLACES", name), Span::call_site());
    let ty = Ident::new(ty, Span::call_site());
    let len = Literal::usize_unsuffixed(places.len());
    let values = places.iter().map(|&place| Literal::u128_unsuffixed(place));
    quote! {
        pub(crate) const #ident: [#ty; #len] = [#(#values),*];
    }
}

fn rustfmt(path: &Path) -> Result<()> {
    let status = Command::new("rustfmt")
        .args(["--edition", "2021"])
        .arg(path)
        .status()
        .context("running rustfmt")?;
    if !status.success() {
        bail!("rustfmt exited with {}", status);
    }
    Ok(())
}
