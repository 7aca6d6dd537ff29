//! Instrument catalog for the dashboard.

/// A listed company the dashboard can track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instrument {
    pub name: &'static str,
    pub ticker: &'static str,
}

/// ASX mining and resources companies tracked by the dashboard.
pub const INSTRUMENTS: [Instrument; 10] = [
    Instrument {
        name: "BHP Group",
        ticker: "BHP.AX",
    },
    Instrument {
        name: "Rio Tinto",
        ticker: "RIO.AX",
    },
    Instrument {
        name: "Fortescue Metals",
        ticker: "FMG.AX",
    },
    Instrument {
        name: "Northern Star",
        ticker: "NST.AX",
    },
    Instrument {
        name: "Evolution Mining",
        ticker: "EVN.AX",
    },
    Instrument {
        name: "Mineral Resources",
        ticker: "MIN.AX",
    },
    Instrument {
        name: "South32",
        ticker: "S32.AX",
    },
    Instrument {
        name: "Newcrest Mining",
        ticker: "NCM.AX",
    },
    Instrument {
        name: "Pilbara Minerals",
        ticker: "PLS.AX",
    },
    Instrument {
        name: "Lynas Rare Earths",
        ticker: "LYC.AX",
    },
];

/// Instruments shown when the user has not picked any.
pub fn default_selection() -> Vec<Instrument> {
    INSTRUMENTS[..3].to_vec()
}

pub fn find_by_ticker(ticker: &str) -> Option<Instrument> {
    INSTRUMENTS
        .iter()
        .copied()
        .find(|i| i.ticker.eq_ignore_ascii_case(ticker))
}

/// Outcome of resolving user-supplied ticker tokens against the catalog.
#[derive(Debug, Default)]
pub struct Selection {
    pub instruments: Vec<Instrument>,
    pub unknown: Vec<String>,
}

/// Resolves tokens to catalog instruments, preserving first-seen order.
/// Duplicates are dropped and unrecognised tokens are collected so the
/// caller can warn about them instead of failing the whole request.
pub fn resolve_selection<'a, I>(tokens: I) -> Selection
where
    I: IntoIterator<Item = &'a str>,
{
    let mut selection = Selection::default();
    for token in tokens {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match find_by_ticker(token) {
            Some(instrument) => {
                if !selection.instruments.contains(&instrument) {
                    selection.instruments.push(instrument);
                }
            }
            None => selection.unknown.push(token.to_string()),
        }
    }
    selection
}
