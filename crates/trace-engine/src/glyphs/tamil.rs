//! Tamil reference path templates.
//!
//! அ to ஊ and the க base stroke are 100-step sine/cosine/arc sweeps.
//! Other consonants and vowel signs are composed from lines,
//! arcs and Bézier hooks in stroke order. The pulli (dot) of a consonant is
//! not traced.

use std::f32::consts::PI;

use super::shapes::{arc, line, quad, Segment};

const HALF_PI: f32 = PI * 0.5;

/// Base stroke of க shared by the whole க series.
const KA_BASE: Segment = Segment::SineX {
    x: [-50.0, 50.0],
    y0: -70.0,
    amp: 140.0,
    freq: 1.0,
    steps: 100,
};

/// Round ஒ body shared by ஒ, ஓ and ஔ.
const O_BODY: Segment = arc([0.0, 0.0], 60.0, -HALF_PI, -PI * 1.7);

/// Leading loop of the கெ/கே/கொ/கோ/கௌ vowel signs.
const E_SIGN: Segment = arc([-80.0, 10.0], 15.0, -HALF_PI, -PI * 1.5);

/// Trailing kāl of the ா sign.
const AA_SIGN: Segment = line([75.0, -60.0], [75.0, 70.0]);

pub static TAMIL_TEMPLATES: &[(&str, &[Segment])] = &[
    // Uyir (vowels)
    (
        "அ",
        &[Segment::SineX {
            x: [-60.0, 60.0],
            y0: -80.0,
            amp: 160.0,
            freq: 0.5,
            steps: 100,
        }],
    ),
    (
        "ஆ",
        &[
            Segment::SineX {
                x: [-70.0, 70.0],
                y0: -90.0,
                amp: 120.0,
                freq: 0.3,
                steps: 100,
            },
            Segment::Line {
                from: [-30.0, 60.0],
                to: [30.0, 60.0],
                steps: 50,
            },
        ],
    ),
    (
        "இ",
        &[Segment::CosY {
            x0: -40.0,
            amp: 80.0,
            freq: 1.0,
            y: [-60.0, 60.0],
            steps: 100,
        }],
    ),
    (
        "ஈ",
        &[Segment::CosY {
            x0: -50.0,
            amp: 100.0,
            freq: 0.8,
            y: [-70.0, 70.0],
            steps: 100,
        }],
    ),
    (
        "உ",
        &[Segment::Arc {
            center: [0.0, -20.0],
            radius: 50.0,
            start: 0.0,
            sweep: PI,
            steps: 63,
        }],
    ),
    (
        "ஊ",
        &[Segment::Arc {
            center: [0.0, -30.0],
            radius: 60.0,
            start: 0.0,
            sweep: PI * 1.2,
            steps: 76,
        }],
    ),
    (
        "எ",
        &[
            line([-40.0, -60.0], [-40.0, 60.0]),
            line([-40.0, 60.0], [40.0, 60.0]),
            line([-40.0, 0.0], [30.0, 0.0]),
        ],
    ),
    (
        "ஏ",
        &[
            line([-40.0, -60.0], [-40.0, 60.0]),
            line([-40.0, 60.0], [40.0, 60.0]),
            line([-40.0, 0.0], [30.0, 0.0]),
            quad([40.0, 60.0], [60.0, 70.0], [50.0, 85.0]),
        ],
    ),
    (
        "ஐ",
        &[
            quad([-60.0, -60.0], [0.0, -80.0], [60.0, -60.0]),
            line([0.0, -60.0], [0.0, 40.0]),
            arc([0.0, 60.0], 20.0, -HALF_PI, PI * 1.5),
        ],
    ),
    ("ஒ", &[O_BODY, line([10.0, -60.0], [10.0, 70.0])]),
    (
        "ஓ",
        &[
            O_BODY,
            line([10.0, -60.0], [10.0, 70.0]),
            quad([10.0, 70.0], [40.0, 90.0], [60.0, 60.0]),
        ],
    ),
    (
        "ஔ",
        &[
            O_BODY,
            line([10.0, -60.0], [10.0, 70.0]),
            line([75.0, -40.0], [75.0, 60.0]),
            arc([75.0, 75.0], 15.0, -HALF_PI, PI * 1.5),
        ],
    ),
    // Mei (consonants)
    (
        "க்",
        &[
            Segment::Line {
                from: [-20.0, -60.0],
                to: [-20.0, 60.0],
                steps: 50,
            },
            Segment::Line {
                from: [-20.0, 0.0],
                to: [20.0, 0.0],
                steps: 50,
            },
        ],
    ),
    (
        "ங்",
        &[
            quad([-40.0, -30.0], [0.0, 20.0], [40.0, -30.0]),
            line([0.0, -20.0], [0.0, 40.0]),
        ],
    ),
    (
        "ச்",
        &[
            arc([0.0, -10.0], 40.0, -PI * 0.25, -PI * 1.5),
            line([28.0, 18.0], [28.0, 70.0]),
        ],
    ),
    (
        "ட்",
        &[
            line([-40.0, -60.0], [-40.0, 60.0]),
            line([-40.0, 60.0], [50.0, 60.0]),
        ],
    ),
    (
        "த்",
        &[
            line([-50.0, -40.0], [40.0, -40.0]),
            line([0.0, -40.0], [0.0, 30.0]),
            arc([20.0, 30.0], 20.0, PI, -PI),
        ],
    ),
    (
        "ப்",
        &[
            line([-40.0, -60.0], [-40.0, 60.0]),
            line([-40.0, 60.0], [40.0, 60.0]),
            line([40.0, 60.0], [40.0, -60.0]),
        ],
    ),
    (
        "ம்",
        &[
            arc([-25.0, -20.0], 25.0, PI, PI),
            line([0.0, -20.0], [0.0, 60.0]),
            line([0.0, 60.0], [50.0, 60.0]),
            line([50.0, 60.0], [50.0, -50.0]),
        ],
    ),
    (
        "வ்",
        &[
            arc([-20.0, 0.0], 35.0, 0.0, -PI * 2.0),
            line([15.0, 0.0], [55.0, 0.0]),
            line([55.0, -50.0], [55.0, 60.0]),
        ],
    ),
    // Uyirmei, க series
    ("க", &[KA_BASE]),
    ("கா", &[KA_BASE, AA_SIGN]),
    ("கி", &[KA_BASE, arc([25.0, -75.0], 25.0, PI, PI)]),
    (
        "கீ",
        &[
            KA_BASE,
            arc([25.0, -75.0], 25.0, PI, PI),
            arc([55.0, -85.0], 10.0, 0.0, -PI * 2.0),
        ],
    ),
    (
        "கு",
        &[KA_BASE, quad([50.0, 30.0], [60.0, 90.0], [0.0, 80.0])],
    ),
    (
        "கூ",
        &[
            KA_BASE,
            quad([50.0, 30.0], [60.0, 90.0], [0.0, 80.0]),
            line([0.0, 80.0], [-40.0, 80.0]),
        ],
    ),
    ("கெ", &[E_SIGN, KA_BASE]),
    (
        "கே",
        &[E_SIGN, line([-80.0, 25.0], [-80.0, 60.0]), KA_BASE],
    ),
    (
        "கை",
        &[
            arc([-80.0, -10.0], 12.0, -HALF_PI, -PI * 1.5),
            arc([-80.0, 25.0], 12.0, -HALF_PI, -PI * 1.5),
            KA_BASE,
        ],
    ),
    ("கொ", &[E_SIGN, KA_BASE, AA_SIGN]),
    (
        "கோ",
        &[E_SIGN, line([-80.0, 25.0], [-80.0, 60.0]), KA_BASE, AA_SIGN],
    ),
    (
        "கௌ",
        &[
            E_SIGN,
            KA_BASE,
            line([75.0, -40.0], [75.0, 60.0]),
            arc([75.0, 75.0], 15.0, -HALF_PI, PI * 1.5),
        ],
    ),
];
