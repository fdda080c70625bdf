//! Resolution of `--select` arguments against the selection state.

use swatch_common::{Result, SwatchError};
use swatch_config::colors::normalize_hex;
use swatch_palette::{ColorModel, SelectionState};
use tracing::info;

/// A parsed `--select` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionArg {
    /// Candidate position.
    Index(usize),
    /// A color outside the candidate list.
    Custom(ColorModel),
}

/// Parse one `--select` value.
///
/// Plain numbers are candidate indices, so an all-digit hex code needs its
/// leading `#` (`#123` rather than `123`).
pub fn parse_selection(arg: &str) -> Result<SelectionArg> {
    let arg = arg.trim();
    if let Ok(index) = arg.parse::<usize>() {
        return Ok(SelectionArg::Index(index));
    }
    let hex = normalize_hex(arg).ok_or_else(|| {
        SwatchError::InvalidSelection(format!("{arg:?} is neither an index nor a hex color"))
    })?;
    Ok(SelectionArg::Custom(ColorModel::new("Custom", hex)))
}

/// Apply each `--select` value in order.
pub fn apply_selections(state: &mut SelectionState, args: &[String]) -> Result<()> {
    for arg in args {
        match parse_selection(arg)? {
            SelectionArg::Index(index) => {
                let count = state.candidates().len();
                state.select_index(index).ok_or_else(|| {
                    SwatchError::InvalidSelection(format!(
                        "index {index} is out of range (have {count} candidates)"
                    ))
                })?;
            }
            SelectionArg::Custom(color) => {
                state.select(&color);
            }
        }
        if let Some(selected) = state.selected() {
            info!("selected {selected}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> SelectionState {
        SelectionState::new(vec![
            ColorModel::new("Red", "FF0000"),
            ColorModel::new("Orange", "FFA500"),
        ])
    }

    #[test]
    fn numbers_parse_as_indices() {
        assert_eq!(parse_selection("1").unwrap(), SelectionArg::Index(1));
        assert_eq!(parse_selection(" 0 ").unwrap(), SelectionArg::Index(0));
    }

    #[test]
    fn hex_parses_as_custom_color() {
        let SelectionArg::Custom(color) = parse_selection("#ffa500").unwrap() else {
            panic!("expected custom color");
        };
        assert_eq!(color.hex_code, "FFA500");
        assert_eq!(color.name, "Custom");
    }

    #[test]
    fn prefixed_digits_are_hex() {
        let SelectionArg::Custom(color) = parse_selection("#123").unwrap() else {
            panic!("expected custom color");
        };
        assert_eq!(color.hex_code, "123");
    }

    #[test]
    fn garbage_is_rejected() {
        let err = parse_selection("orange").unwrap_err();
        assert!(matches!(err, SwatchError::InvalidSelection(_)));
    }

    #[test]
    fn apply_in_order() {
        let mut state = state();
        apply_selections(&mut state, &["1".to_string()]).unwrap();
        assert_eq!(state.selected().unwrap().name, "Orange");

        apply_selections(&mut state, &["0".to_string(), "#FFA500".to_string()]).unwrap();
        // Matches the Orange candidate by hex.
        assert_eq!(state.selected_index(), Some(1));
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let mut state = state();
        let err = apply_selections(&mut state, &["9".to_string()]).unwrap_err();
        assert!(err.to_string().contains("out of range"));
        assert_eq!(state.selected_index(), Some(0));
    }
}
