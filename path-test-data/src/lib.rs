//! test data shared between the path-data crates.

/// Well formed paths, one per line.
pub static ICONS: &str = include_str!("../test_data/icons.txt");

/// Returns an iterator over the paths in [`ICONS`].
pub fn icons() -> impl Iterator<Item = &'static str> {
    ICONS.lines().filter(|line| !line.trim().is_empty())
}

pub mod path {
    /// Every command letter, in both absolute and relative form.
    pub static ALL_COMMANDS: &str = "M10 10 m5 5 L20 20 l5 5 H30 h5 V40 v5 \
        C1 2 3 4 5 6 c1 2 3 4 5 6 S1 2 3 4 s1 2 3 4 \
        Q1 2 3 4 q1 2 3 4 T1 2 t1 2 \
        A25 25 -30 0 1 50 -25 a25 25 -30 1 0 50 -25 Z z";

    /// Numbers without separators wherever the grammar permits.
    pub static COMPACT: &str = "M.5.5l-1-1.5e1.5.5L1e-1-2E+2a1 1 0 1150 50z";

    /// Implicit repetition across several command kinds.
    pub static REPEATED: &str = "M0,0 1,1 2,2 L3,3 4,4 h1 2 3 c1,1 2,2 3,3 4,4 5,5 6,6";

    /// A path with a malformed first subpath and a valid second subpath.
    pub static RECOVERABLE: &str = "M0,0 L1,1 Q L5,5 M10,10 L20,20";

    /// An arc with a flag that is neither `0` nor `1`.
    pub static INVALID_ARC_FLAG: &str = "A1,1,0,2,0,10,10";
}

pub mod points {
    /// A five pointed star.
    pub static STAR: &str = "50,0 61,35 98,35 68,57 79,91 50,70 21,91 32,57 2,35 39,35";

    /// A triangle written with every permitted separator.
    pub static MIXED_SEPARATORS: &str = " 0,0\n10 , 10\t20 0 ";

    /// An odd number of coordinates.
    pub static UNPAIRED: &str = "0,0 10,10 20";
}

pub mod number_list {
    pub static VIEW_BOX: &str = "0 0 1024 768";

    pub static MIXED: &str = "1.5,-2e3 .25 -.75,+8";
}
