//! Table regeneration and cross-checking
//!
//! Recomputes the exponent, logarithm and generator tables of a field from scratch, without
//! the shared tables or the packed arithmetic, and compares them with the ones the library
//! uses at runtime. The `tables` command prints the result.

use crate::galois::{GaloisField, LOG_ZERO};
use crate::poly::{self, scalar, Packed};
use crate::reed_solomon::RsField;
use std::fmt;
use thiserror::Error;

/// A recomputed table entry that disagrees with the library's
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {table} table differs at index {index}: computed {computed:#x}, library {library:#x}")]
pub struct TableMismatch {
    pub field: &'static str,
    pub table: &'static str,
    pub index: usize,
    pub computed: u64,
    pub library: u64,
}

/// Independently computed tables for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTables {
    name: &'static str,
    bits: u32,
    prime: u8,
    exp: Vec<u8>,
    log: Vec<u8>,
    generators: Vec<Packed>,
}

impl FieldTables {
    /// Walk the powers of 2 by repeated doubling and build generators term by term
    pub fn compute<F: GaloisField>() -> Self {
        let max = F::MAX as usize;

        let mut exp = Vec::with_capacity(F::EXP_ENTRIES);
        let mut x = 1u8;
        for _ in 0..max {
            exp.push(x);
            x = F::mul_by_2(x);
        }
        exp.extend_from_within(..max);

        let mut log = vec![LOG_ZERO; max + 1];
        for (power, &value) in exp[..max].iter().enumerate() {
            log[value as usize] = power as u8;
        }

        let mut generators = Vec::with_capacity(F::MAX_CHECK_SYMBOLS as usize + 1);
        let mut g: Packed = 1;
        generators.push(g);
        for i in 1..=F::MAX_CHECK_SYMBOLS as usize {
            g = scalar::mul::<F>(g, poly::from_coefficients::<F>(&[exp[i], 1]));
            generators.push(g);
        }

        Self {
            name: F::NAME,
            bits: F::SYMBOL_BITS,
            prime: F::PRIME,
            exp,
            log,
            generators,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn exp(&self) -> &[u8] {
        &self.exp
    }

    pub fn log(&self) -> &[u8] {
        &self.log
    }

    pub fn generators(&self) -> &[Packed] {
        &self.generators
    }

    /// Compare against the tables `F` uses at runtime
    pub fn verify<F: RsField>(&self) -> Result<(), TableMismatch> {
        let library = F::table();
        compare(self.name, "exp", &self.exp, library.exp_table())?;
        compare(self.name, "log", &self.log, library.log_table())?;

        let generators: Vec<Packed> = F::generators().iter().collect();
        compare(self.name, "generator", &self.generators, &generators)
    }

    fn format_packed(&self, p: Packed) -> String {
        match self.bits {
            3 => format!("{p:#o}"),
            _ => format!("{p:#x}"),
        }
    }
}

fn compare<T: Copy + Into<u64> + PartialEq>(
    field: &'static str,
    table: &'static str,
    computed: &[T],
    library: &[T],
) -> Result<(), TableMismatch> {
    let len = computed.len().max(library.len());
    for index in 0..len {
        let ours = computed.get(index).copied();
        let theirs = library.get(index).copied();
        if ours != theirs {
            return Err(TableMismatch {
                field,
                table,
                index,
                computed: ours.map_or(u64::MAX, Into::into),
                library: theirs.map_or(u64::MAX, Into::into),
            });
        }
    }
    Ok(())
}

impl fmt::Display for FieldTables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (prime {:#b})", self.name, self.prime)?;

        let exp: Vec<String> = self.exp.iter().map(|v| v.to_string()).collect();
        writeln!(f, "  exp: [{}]", exp.join(", "))?;

        let log: Vec<String> = self
            .log
            .iter()
            .map(|&v| {
                if v == LOG_ZERO {
                    "-".to_string()
                } else {
                    v.to_string()
                }
            })
            .collect();
        writeln!(f, "  log: [{}]", log.join(", "))?;

        writeln!(f, "  generators:")?;
        for (k, &g) in self.generators.iter().enumerate() {
            writeln!(f, "    g{k:<2} = {}", self.format_packed(g))?;
        }
        Ok(())
    }
}
