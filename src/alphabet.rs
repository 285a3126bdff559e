use std::fmt;

use once_cell::sync::Lazy;

/// The default symbol ordering: digits, lowercase, uppercase, `_` and `$`.
const STANDARD_SYMBOLS: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_$";

/// Like the standard ordering, but the two extra symbols are `-` and `_`,
/// both RFC 3986 unreserved characters.
const URL_SAFE_SYMBOLS: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ-_";

static STANDARD: Lazy<Alphabet> =
    Lazy::new(|| Alphabet::new(STANDARD_SYMBOLS).expect("Standard alphabet should be valid"));

static URL_SAFE: Lazy<Alphabet> =
    Lazy::new(|| Alphabet::new(URL_SAFE_SYMBOLS).expect("URL-safe alphabet should be valid"));

/// Error returned when constructing an [`Alphabet`] from an invalid symbol set.
#[derive(Debug, PartialEq, Eq)]
pub enum AlphabetError {
    WrongLength(usize),
    DuplicateSymbol(char),
    UnsupportedSymbol(char),
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AlphabetError::WrongLength(n) => {
                write!(f, "Alphabet must have exactly {} symbols, got {}", Alphabet::LEN, n)
            }
            AlphabetError::DuplicateSymbol(c) => {
                write!(f, "Duplicate symbol in alphabet: {:?}", c)
            }
            AlphabetError::UnsupportedSymbol(c) => {
                write!(f, "Alphabet symbols must be printable ASCII, got {:?}", c)
            }
        }
    }
}

impl std::error::Error for AlphabetError {}

/// An ordered set of 64 printable ASCII symbols.
///
/// The position of a symbol defines its digit value (0 to 63), so the mapping
/// between symbols and digits is bijective. Both lookup directions are plain
/// array indexing; an `Alphabet` is immutable after construction and can be
/// shared freely between threads.
#[derive(Clone)]
pub struct Alphabet {
    /// Digit value to symbol.
    symbols: [u8; Alphabet::LEN],
    /// Byte to digit value, -1 for bytes outside the alphabet.
    digits: [i8; 256],
}

impl Alphabet {
    /// Number of symbols in an alphabet, and the base of the numeral system.
    pub const LEN: usize = 64;

    /// Creates an alphabet from a string of exactly 64 distinct printable
    /// ASCII symbols. The first symbol is the zero symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use idte_rs::Alphabet;
    ///
    /// let alphabet = Alphabet::new(
    ///     "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_$",
    /// ).unwrap();
    /// assert_eq!(alphabet.digit('$'), Some(63));
    /// ```
    pub fn new(symbols: &str) -> Result<Alphabet, AlphabetError> {
        let count = symbols.chars().count();
        if count != Self::LEN {
            return Err(AlphabetError::WrongLength(count));
        }

        let mut table = [0u8; Self::LEN];
        let mut digits = [-1i8; 256];
        for (i, c) in symbols.chars().enumerate() {
            if !c.is_ascii_graphic() {
                return Err(AlphabetError::UnsupportedSymbol(c));
            }
            let byte = c as u8;
            if digits[byte as usize] != -1 {
                return Err(AlphabetError::DuplicateSymbol(c));
            }
            digits[byte as usize] = i as i8;
            table[i] = byte;
        }

        Ok(Alphabet { symbols: table, digits })
    }

    /// The default alphabet: `0`-`9`, `a`-`z`, `A`-`Z`, `_`, `$`.
    pub fn standard() -> &'static Alphabet {
        &STANDARD
    }

    /// An URL-safe alphabet: `0`-`9`, `a`-`z`, `A`-`Z`, `-`, `_`.
    pub fn url_safe() -> &'static Alphabet {
        &URL_SAFE
    }

    /// Returns the symbol for a digit value, or `None` if the digit is out
    /// of range.
    pub fn symbol(&self, digit: u8) -> Option<char> {
        self.symbols.get(digit as usize).map(|&b| b as char)
    }

    /// Returns the digit value of a symbol, or `None` if the character is
    /// not in the alphabet.
    pub fn digit(&self, c: char) -> Option<u8> {
        if !c.is_ascii() {
            return None;
        }
        match self.digits[c as usize] {
            -1 => None,
            d => Some(d as u8),
        }
    }

    /// Symbol for a digit known to be in range (encoders mask to 6 bits).
    pub(crate) fn symbol_byte(&self, digit: u8) -> u8 {
        self.symbols[(digit & 0x3f) as usize]
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // The lookup table is noise; show the symbol ordering only.
        f.debug_struct("Alphabet")
            .field("symbols", &std::str::from_utf8(&self.symbols).unwrap_or("<non-utf8>"))
            .finish()
    }
}
