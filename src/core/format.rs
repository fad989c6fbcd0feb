use crate::core::params::ConversionParams;
use crate::types::NumeralKind;

/// Marker emitted when there is nothing meaningful to display.
pub const NOT_APPLICABLE: &str = "NA";

/// Suffix on verbose Arabic to Roman lines rendered in additive notation.
pub const ADDITIVE_SUFFIX: &str = "\t (add)";

/// Build the display line for one conversion.
///
/// `target` is the kind being displayed as the result: `Roman` for an
/// Arabic input, `Arabic` for a Roman input.
pub fn format_value(
    arabic: u64,
    roman: &str,
    target: NumeralKind,
    params: &ConversionParams,
) -> String {
    match target {
        NumeralKind::Roman if params.simple => roman.to_string(),
        NumeralKind::Roman => {
            let mut line = format!("{arabic} = {roman}");
            if params.is_additive() {
                line.push_str(ADDITIVE_SUFFIX);
            }
            line
        }
        NumeralKind::Arabic if params.simple => arabic.to_string(),
        NumeralKind::Arabic => format!("{roman} = {arabic}"),
        NumeralKind::Undefined => NOT_APPLICABLE.to_string(),
    }
}
