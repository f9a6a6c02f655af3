//! Set of useful parser combinators
//!
//! The identification string (DSID) is the one place the format leaves
//! fixed-column territory: dataset semantics are carried as free text and
//! recovered by pattern matching. The patterns are an ordered list; the
//! first match wins and anything unmatched is simply an unknown dataset,
//! never an error.

// internal modules
use crate::dataset::{DatasetType, DecayInfo};

// nom parser combinators
use nom::bytes::complete::{tag, take_while1, take_while_m_n};
use nom::character::complete::{char, space0};
use nom::combinator::opt;
use nom::sequence::{delimited, preceded, terminated};
use nom::IResult;

/// Letters permitted in a half-life unit code
const UNIT_ALPHABET: &str = "YDHMUNKPAFSEV";

/// Classify a DSID identification field into a dataset type
///
/// Ordered list of the known identification patterns, first match wins:
/// REFERENCES, COMMENTS, ADOPTED LEVELS (with or without ", GAMMAS"),
/// DECAYS (nuclide-mode-energy pattern, or a muonic atom), REACTIONS.
/// A DECAYS match also returns its captured sub-fields.
pub(crate) fn dataset_type(i: &str) -> (DatasetType, Option<DecayInfo>) {
    let i = i.trim();
    if i.starts_with("REFERENCES") {
        (DatasetType::References, None)
    } else if i.starts_with("COMMENTS") {
        (DatasetType::Comments, None)
    } else if i.starts_with("ADOPTED LEVELS") {
        (DatasetType::AdoptedLevels, None)
    } else if let Ok((_, info)) = decay_dsid(i) {
        (DatasetType::Decays, Some(info))
    } else if i.contains("MUONIC ATOM") {
        (DatasetType::Decays, None)
    } else if i.contains("(HI,XNG)") || i.contains("COULOMB EXCITATION") {
        (DatasetType::Reactions, None)
    } else {
        (DatasetType::Unknown, None)
    }
}

/// Parse a `<A><Sym>[+E] <mode> DECAY (<T> <U>)` identification string
///
/// The excitation marker and the parenthesised half-life are optional,
/// e.g. "58NI EC DECAY (2.0 D)", "152EU[+0] B- DECAY", "3H B- DECAY".
pub(crate) fn decay_dsid(i: &str) -> IResult<&str, DecayInfo> {
    let (i, parent_mass) = mass_number(i)?;
    let (i, parent_symbol) = element(i)?;
    let (i, excitation) = opt(excitation_marker)(i)?;
    let (i, _) = char(' ')(i)?;
    let (i, mode) = decay_mode(i)?;
    let (i, _) = tag(" DECAY")(i)?;
    let (i, half_life) = opt(half_life)(i)?;

    let (half_life, unit) = match half_life {
        Some((value, unit)) => (
            Some(value.to_string()),
            (!unit.is_empty()).then(|| unit.to_string()),
        ),
        None => (None, None),
    };

    Ok((
        i,
        DecayInfo {
            parent_mass,
            parent_symbol: parent_symbol.to_string(),
            excitation,
            mode: mode.to_string(),
            half_life,
            unit,
        },
    ))
}

/// Mass number of up to three digits
fn mass_number(i: &str) -> IResult<&str, u32> {
    let (i, digits) = take_while_m_n(1, 3, |c: char| c.is_ascii_digit())(i)?;
    let (_, value) = nom::character::complete::u32(digits)?;
    Ok((i, value))
}

/// Element symbol of up to two characters, as written in the DSID
fn element(i: &str) -> IResult<&str, &str> {
    take_while_m_n(1, 2, |c: char| c.is_ascii_alphabetic())(i)
}

/// Excitation-energy marker of an isomeric parent, e.g. `[+152]`
fn excitation_marker(i: &str) -> IResult<&str, u32> {
    delimited(tag("[+"), nom::character::complete::u32, char(']'))(i)
}

/// Decay mode token, e.g. `B-`, `EC`, `2B-`, `IT`
fn decay_mode(i: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '+' || c == '-')(i)
}

/// Parenthesised parent half-life, e.g. ` (2.0 D)`
fn half_life(i: &str) -> IResult<&str, (&str, &str)> {
    preceded(tag(" ("), terminated(time_field, char(')')))(i)
}

/// Split a half-life field into its numeric literal and unit code
pub(crate) fn time_field(i: &str) -> IResult<&str, (&str, &str)> {
    let (i, value) = number_literal(i)?;
    let (i, _) = space0(i)?;
    let (i, unit) = unit_code(i)?;
    Ok((i, (value, unit)))
}

/// Unsigned number literal, e.g. `345`, `345.34`, `23.E+9`
fn number_literal(i: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_digit() || matches!(c, '.' | 'E' | '+' | '-'))(i)
}

/// Half-life unit code of up to three letters
fn unit_code(i: &str) -> IResult<&str, &str> {
    take_while_m_n(0, 3, |c: char| UNIT_ALPHABET.contains(c))(i)
}
