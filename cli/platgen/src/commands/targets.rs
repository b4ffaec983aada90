//! `platgen targets` — list generated-file kinds.

use anyhow::Result;

use platgen_emit::Target;

/// Print every target kind with its description.
pub fn list() -> Result<()> {
    println!("Targets:");
    println!();
    for target in Target::all() {
        println!("  {:<25} {}", target.name(), target.description());
    }
    println!();
    println!("Use 'platgen render <target>' to preview one.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_succeeds() {
        assert!(list().is_ok());
    }
}
