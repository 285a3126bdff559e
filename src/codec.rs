use std::fmt;

use crate::alphabet::Alphabet;
use crate::Config;

/// The base of the positional numeral system, equal to the alphabet size.
pub const BASE: u64 = Alphabet::LEN as u64;

/// Width of the fixed-length form. 11 base-64 digits are necessary and
/// sufficient for any 64-bit value (64^11 > 2^64 >= 64^10).
pub const FIXED_LENGTH: usize = 11;

/// Maximum length of any encoded identifier, fixed or variable.
pub const MAX_LENGTH: usize = FIXED_LENGTH;

/// Error returned for decode errors.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// The input length is outside what the decoder accepts.
    InvalidLength { received: usize },
    /// The input contains a character that is not in the alphabet.
    InvalidCharacter { received: char, position: usize },
    /// The input is non-canonical: a leading zero symbol on a
    /// multi-character variable-length identifier.
    InvalidFormat,
    /// The decoded value would not fit in 64 bits.
    OutOfRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidLength { received } => {
                write!(f, "Invalid identifier length: {}", received)
            }
            Error::InvalidCharacter { received, position } => {
                write!(
                    f,
                    "Invalid character {:?} at position {} in identifier",
                    received, position
                )
            }
            Error::InvalidFormat => {
                write!(f, "Non-canonical identifier with a leading zero symbol")
            }
            Error::OutOfRange => {
                write!(f, "Identifier value exceeds 64 bits")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Core encoder/decoder.
///
/// Converts 64-bit values to short printable identifiers and back, in two
/// forms sharing one alphabet: a fixed-length form of exactly
/// [`FIXED_LENGTH`] characters, left-padded with the zero symbol, and a
/// variable-length form that is the unique minimal representation of the
/// value. Encoding never fails; decoding validates strictly and reports the
/// first violated check.
///
/// # Examples
///
/// ```
/// use idte_rs::Codec;
///
/// let codec = Codec::default();
/// assert_eq!(codec.encode_fixed(0xDEADBEEF), "000003uHrXL");
/// assert_eq!(codec.encode(0xDEADBEEF), "3uHrXL");
/// assert_eq!(codec.decode("3uHrXL"), Ok(0xDEADBEEF));
/// ```
#[derive(Clone, Debug)]
pub struct Codec {
    alphabet: Alphabet,
}

impl Codec {
    /// Creates a new `Codec` instance with the alphabet from `config`.
    ///
    /// # Examples
    ///
    /// ```
    /// use idte_rs::{Alphabet, Codec, Config};
    ///
    /// let codec = Codec::new(&Config::new().alphabet(Alphabet::url_safe().clone()));
    /// assert_eq!(codec.encode(u64::MAX), "f__________");
    /// ```
    pub fn new(config: &Config) -> Codec {
        Codec {
            alphabet: config.alphabet.clone(),
        }
    }

    /// Encodes a value into the fixed-length form: exactly [`FIXED_LENGTH`]
    /// characters, most significant digit first, left-padded with the zero
    /// symbol. Every 64-bit value has exactly one fixed-length encoding.
    ///
    /// # Examples
    ///
    /// ```
    /// use idte_rs::Codec;
    ///
    /// let codec = Codec::default();
    /// assert_eq!(codec.encode_fixed(0), "00000000000");
    /// assert_eq!(codec.encode_fixed(0xFE21B3A4D9C8E712), "fUxIWjpOesi");
    /// ```
    pub fn encode_fixed(&self, value: u64) -> String {
        let mut out = String::with_capacity(FIXED_LENGTH);
        self.encode_fixed_buf(value, &mut out);
        out
    }

    /// Appends the fixed-length form of `value` to `buf` and returns the
    /// number of characters written, always [`FIXED_LENGTH`].
    pub fn encode_fixed_buf(&self, value: u64, buf: &mut String) -> usize {
        let mut digits = [0u8; FIXED_LENGTH];
        let mut rest = value;
        for slot in digits.iter_mut().rev() {
            *slot = (rest % BASE) as u8;
            rest /= BASE;
        }
        for &digit in &digits {
            buf.push(self.alphabet.symbol_byte(digit) as char);
        }
        FIXED_LENGTH
    }

    /// Decodes a fixed-length identifier back to its value.
    ///
    /// The input must be exactly [`FIXED_LENGTH`] bytes (`InvalidLength`
    /// otherwise), every character must be in the alphabet
    /// (`InvalidCharacter`), and the accumulated value must fit in 64 bits
    /// (`OutOfRange`). Leading zero symbols are expected here, not rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use idte_rs::{Codec, Error};
    ///
    /// let codec = Codec::default();
    /// assert_eq!(codec.decode_fixed("fUxIWjpOesi"), Ok(0xFE21B3A4D9C8E712));
    /// assert_eq!(
    ///     codec.decode_fixed("fUxIWjpOes"),
    ///     Err(Error::InvalidLength { received: 10 }),
    /// );
    /// ```
    pub fn decode_fixed(&self, encoded: &str) -> Result<u64, Error> {
        if encoded.len() != FIXED_LENGTH {
            return Err(Error::InvalidLength {
                received: encoded.len(),
            });
        }
        let (digits, count) = self.read_digits(encoded)?;
        accumulate(&digits[..count])
    }

    /// Encodes a value into the variable-length form: the shortest string
    /// that round-trips it, 1 to [`MAX_LENGTH`] characters. Zero encodes to
    /// the single zero symbol; no other encoding starts with it.
    ///
    /// # Examples
    ///
    /// ```
    /// use idte_rs::Codec;
    ///
    /// let codec = Codec::default();
    /// assert_eq!(codec.encode(0), "0");
    /// assert_eq!(codec.encode(12345), "30V");
    /// assert_eq!(codec.encode(u64::MAX), "f$$$$$$$$$$");
    /// ```
    pub fn encode(&self, value: u64) -> String {
        let mut out = String::with_capacity(MAX_LENGTH);
        self.encode_buf(value, &mut out);
        out
    }

    /// Appends the variable-length form of `value` to `buf` and returns the
    /// number of characters written (1 to [`MAX_LENGTH`]).
    pub fn encode_buf(&self, value: u64, buf: &mut String) -> usize {
        // Digits come out least significant first; collect, then emit in
        // reverse. A zero value still produces one digit.
        let mut digits = [0u8; MAX_LENGTH];
        let mut rest = value;
        let mut count = 0;
        loop {
            digits[count] = (rest % BASE) as u8;
            count += 1;
            rest /= BASE;
            if rest == 0 {
                break;
            }
        }
        for &digit in digits[..count].iter().rev() {
            buf.push(self.alphabet.symbol_byte(digit) as char);
        }
        count
    }

    /// Decodes a variable-length identifier back to its value.
    ///
    /// Checks are applied in a fixed order and the first violation wins:
    /// the length must be 1 to [`MAX_LENGTH`] bytes (`InvalidLength`), every
    /// character must be in the alphabet (`InvalidCharacter`), a
    /// multi-character input must not start with the zero symbol
    /// (`InvalidFormat`), and the accumulated value must fit in 64 bits
    /// (`OutOfRange`).
    ///
    /// # Examples
    ///
    /// ```
    /// use idte_rs::{Codec, Error};
    ///
    /// let codec = Codec::default();
    /// assert_eq!(codec.decode("0"), Ok(0));
    /// assert_eq!(codec.decode("30V"), Ok(12345));
    /// assert_eq!(codec.decode("030V"), Err(Error::InvalidFormat));
    /// ```
    pub fn decode(&self, encoded: &str) -> Result<u64, Error> {
        if encoded.is_empty() || encoded.len() > MAX_LENGTH {
            return Err(Error::InvalidLength {
                received: encoded.len(),
            });
        }
        let (digits, count) = self.read_digits(encoded)?;
        if count > 1 && digits[0] == 0 {
            return Err(Error::InvalidFormat);
        }
        accumulate(&digits[..count])
    }

    /// Returns whether `encoded` is a valid variable-length identifier,
    /// collapsing all decode error kinds into a single flag.
    pub fn is_valid(&self, encoded: &str) -> bool {
        self.decode(encoded).is_ok()
    }

    /// Maps every character to its digit value, rejecting non-members.
    /// Callers have already bounded the input to `MAX_LENGTH` bytes.
    fn read_digits(&self, encoded: &str) -> Result<([u8; MAX_LENGTH], usize), Error> {
        let mut digits = [0u8; MAX_LENGTH];
        let mut count = 0;
        for (position, c) in encoded.chars().enumerate() {
            digits[count] = self.alphabet.digit(c).ok_or(Error::InvalidCharacter {
                received: c,
                position,
            })?;
            count += 1;
        }
        Ok((digits, count))
    }
}

impl Default for Codec {
    fn default() -> Codec {
        Codec {
            alphabet: Alphabet::standard().clone(),
        }
    }
}

/// Left-to-right accumulation with overflow detection. The multiply-and-add
/// must be overflow-checked at every step; 11 base-64 digits can exceed
/// 64 bits well before the last digit.
fn accumulate(digits: &[u8]) -> Result<u64, Error> {
    let mut value: u64 = 0;
    for &digit in digits {
        value = value
            .checked_mul(BASE)
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or(Error::OutOfRange)?;
    }
    Ok(value)
}
