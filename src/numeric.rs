/// A human-readable magnitude ("1.2K views", "3M subscribers") reduced to a
/// number, or a marker that the text could not be parsed. Downstream math
/// treats `Unparsed` as zero, but keeping the marker lets callers tell a
/// legitimate zero apart from page-format drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Magnitude {
    Parsed(f64),
    Unparsed,
}

impl Magnitude {
    /// Parses a magnitude string. Unit words and thousands separators are
    /// stripped; a single K/M/B suffix scales the remainder (B wins over M
    /// wins over K). Any failure yields `Unparsed`, never an error.
    pub fn parse(text: &str) -> Magnitude {
        let mut body = text
            .replace(" views", "")
            .replace(" view", "")
            .replace(" subscribers", "")
            .replace(" subscriber", "")
            .replace(',', "")
            .trim()
            .to_string();

        let mut multiplier = 1.0;
        if body.contains('B') {
            multiplier = 1_000_000_000.0;
            body = body.replace('B', "");
        } else if body.contains('M') {
            multiplier = 1_000_000.0;
            body = body.replace('M', "");
        } else if body.contains('K') {
            multiplier = 1_000.0;
            body = body.replace('K', "");
        }

        match body.trim().parse::<f64>() {
            Ok(value) => Magnitude::Parsed(value * multiplier),
            Err(_) => Magnitude::Unparsed,
        }
    }

    /// The parsed value, with `Unparsed` degrading silently to zero.
    pub fn value(&self) -> f64 {
        match self {
            Magnitude::Parsed(value) => *value,
            Magnitude::Unparsed => 0.0,
        }
    }
}
