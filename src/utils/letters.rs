use once_cell::sync::Lazy;

/// Letter frequency weights for English (approximate, per mille)
/// Used as the built-in distribution when no file is supplied
pub static ENGLISH_LETTER_WEIGHTS: Lazy<Vec<(char, u32)>> = Lazy::new(|| {
    vec![
        ('E', 127),
        ('T', 91),
        ('A', 82),
        ('O', 75),
        ('I', 70),
        ('N', 67),
        ('S', 63),
        ('H', 61),
        ('R', 60),
        ('D', 43),
        ('L', 40),
        ('C', 28),
        ('U', 28),
        ('M', 24),
        ('W', 24),
        ('F', 22),
        ('G', 20),
        ('Y', 20),
        ('P', 19),
        ('B', 15),
        ('V', 10),
        ('K', 8),
        ('J', 2),
        ('X', 2),
        ('Q', 1),
        ('Z', 1),
    ]
});
