//! Latin reference path templates (A-Z, a-z).
//!
//! Capitals span y in [-80, 80]. Small letters sit on the same baseline
//! (y = 80) with an x-height line at y = -10; ascenders reach -80 and
//! descenders 100.

use std::f32::consts::PI;

use super::shapes::{arc, ellipse, line, quad, Segment};

const HALF_PI: f32 = PI * 0.5;
const TAU: f32 = PI * 2.0;

const CAP_O: Segment = ellipse([0.0, 0.0], [50.0, 80.0], -HALF_PI, -TAU);
const CAP_P_STEM: Segment = line([-40.0, 80.0], [-40.0, -80.0]);
const CAP_P_BOWL: [Segment; 3] = [
    line([-40.0, -80.0], [0.0, -80.0]),
    arc([0.0, -45.0], 35.0, -HALF_PI, PI),
    line([0.0, -10.0], [-40.0, -10.0]),
];

pub static LATIN_TEMPLATES: &[(&str, &[Segment])] = &[
    // Capitals
    (
        "A",
        &[
            line([-50.0, 80.0], [0.0, -80.0]),
            line([0.0, -80.0], [50.0, 80.0]),
            line([-28.0, 10.0], [28.0, 10.0]),
        ],
    ),
    (
        "B",
        &[
            line([-40.0, -80.0], [-40.0, 80.0]),
            line([-40.0, -80.0], [0.0, -80.0]),
            arc([0.0, -40.0], 40.0, -HALF_PI, PI),
            line([0.0, 0.0], [-40.0, 0.0]),
            line([-40.0, 0.0], [5.0, 0.0]),
            arc([5.0, 40.0], 40.0, -HALF_PI, PI),
            line([5.0, 80.0], [-40.0, 80.0]),
        ],
    ),
    ("C", &[ellipse([0.0, 0.0], [50.0, 80.0], -PI * 0.25, -PI * 1.5)]),
    (
        "D",
        &[
            line([-40.0, -80.0], [-40.0, 80.0]),
            line([-40.0, -80.0], [-10.0, -80.0]),
            ellipse([-10.0, 0.0], [50.0, 80.0], -HALF_PI, PI),
            line([-10.0, 80.0], [-40.0, 80.0]),
        ],
    ),
    (
        "E",
        &[
            line([40.0, -80.0], [-40.0, -80.0]),
            line([-40.0, -80.0], [-40.0, 80.0]),
            line([-40.0, 80.0], [40.0, 80.0]),
            line([-40.0, 0.0], [25.0, 0.0]),
        ],
    ),
    (
        "F",
        &[
            line([40.0, -80.0], [-40.0, -80.0]),
            line([-40.0, -80.0], [-40.0, 80.0]),
            line([-40.0, 0.0], [25.0, 0.0]),
        ],
    ),
    (
        "G",
        &[
            ellipse([0.0, 0.0], [50.0, 80.0], -PI * 0.25, -PI * 1.75),
            line([50.0, 0.0], [10.0, 0.0]),
        ],
    ),
    (
        "H",
        &[
            line([-45.0, -80.0], [-45.0, 80.0]),
            line([45.0, -80.0], [45.0, 80.0]),
            line([-45.0, 0.0], [45.0, 0.0]),
        ],
    ),
    (
        "I",
        &[
            line([0.0, -80.0], [0.0, 80.0]),
            line([-30.0, -80.0], [30.0, -80.0]),
            line([-30.0, 80.0], [30.0, 80.0]),
        ],
    ),
    (
        "J",
        &[
            line([30.0, -80.0], [30.0, 40.0]),
            arc([-5.0, 40.0], 35.0, 0.0, PI),
        ],
    ),
    (
        "K",
        &[
            line([-40.0, -80.0], [-40.0, 80.0]),
            line([40.0, -80.0], [-40.0, 10.0]),
            line([-20.0, -10.0], [45.0, 80.0]),
        ],
    ),
    (
        "L",
        &[
            line([-40.0, -80.0], [-40.0, 80.0]),
            line([-40.0, 80.0], [40.0, 80.0]),
        ],
    ),
    (
        "M",
        &[
            line([-50.0, 80.0], [-50.0, -80.0]),
            line([-50.0, -80.0], [0.0, 20.0]),
            line([0.0, 20.0], [50.0, -80.0]),
            line([50.0, -80.0], [50.0, 80.0]),
        ],
    ),
    (
        "N",
        &[
            line([-45.0, 80.0], [-45.0, -80.0]),
            line([-45.0, -80.0], [45.0, 80.0]),
            line([45.0, 80.0], [45.0, -80.0]),
        ],
    ),
    ("O", &[CAP_O]),
    ("P", &[CAP_P_STEM, CAP_P_BOWL[0], CAP_P_BOWL[1], CAP_P_BOWL[2]]),
    ("Q", &[CAP_O, line([15.0, 45.0], [55.0, 90.0])]),
    (
        "R",
        &[
            CAP_P_STEM,
            CAP_P_BOWL[0],
            CAP_P_BOWL[1],
            CAP_P_BOWL[2],
            line([-10.0, -10.0], [45.0, 80.0]),
        ],
    ),
    (
        "S",
        &[
            arc([0.0, -40.0], 40.0, -PI * 0.25, -PI * 1.25),
            arc([0.0, 40.0], 40.0, -HALF_PI, PI * 1.25),
        ],
    ),
    (
        "T",
        &[
            line([-50.0, -80.0], [50.0, -80.0]),
            line([0.0, -80.0], [0.0, 80.0]),
        ],
    ),
    (
        "U",
        &[
            line([-40.0, -80.0], [-40.0, 40.0]),
            arc([0.0, 40.0], 40.0, PI, -PI),
            line([40.0, 40.0], [40.0, -80.0]),
        ],
    ),
    (
        "V",
        &[
            line([-50.0, -80.0], [0.0, 80.0]),
            line([0.0, 80.0], [50.0, -80.0]),
        ],
    ),
    (
        "W",
        &[
            line([-55.0, -80.0], [-30.0, 80.0]),
            line([-30.0, 80.0], [0.0, -20.0]),
            line([0.0, -20.0], [30.0, 80.0]),
            line([30.0, 80.0], [55.0, -80.0]),
        ],
    ),
    (
        "X",
        &[
            line([-45.0, -80.0], [45.0, 80.0]),
            line([45.0, -80.0], [-45.0, 80.0]),
        ],
    ),
    (
        "Y",
        &[
            line([-45.0, -80.0], [0.0, 0.0]),
            line([45.0, -80.0], [0.0, 0.0]),
            line([0.0, 0.0], [0.0, 80.0]),
        ],
    ),
    (
        "Z",
        &[
            line([-45.0, -80.0], [45.0, -80.0]),
            line([45.0, -80.0], [-45.0, 80.0]),
            line([-45.0, 80.0], [45.0, 80.0]),
        ],
    ),
    // Small letters
    (
        "a",
        &[
            arc([-5.0, 40.0], 35.0, 0.0, -TAU),
            line([30.0, 5.0], [30.0, 80.0]),
        ],
    ),
    (
        "b",
        &[
            line([-30.0, -80.0], [-30.0, 80.0]),
            arc([5.0, 45.0], 35.0, PI, TAU),
        ],
    ),
    ("c", &[arc([0.0, 40.0], 40.0, -PI * 0.25, -PI * 1.5)]),
    (
        "d",
        &[
            arc([-5.0, 45.0], 35.0, 0.0, -TAU),
            line([30.0, -80.0], [30.0, 80.0]),
        ],
    ),
    (
        "e",
        &[
            line([-35.0, 40.0], [35.0, 40.0]),
            arc([0.0, 40.0], 35.0, 0.0, -PI * 1.75),
        ],
    ),
    (
        "f",
        &[
            quad([35.0, -70.0], [0.0, -100.0], [0.0, -50.0]),
            line([0.0, -50.0], [0.0, 80.0]),
            line([-25.0, -10.0], [25.0, -10.0]),
        ],
    ),
    (
        "g",
        &[
            arc([-5.0, 35.0], 35.0, 0.0, -TAU),
            line([30.0, 0.0], [30.0, 80.0]),
            arc([0.0, 80.0], 30.0, 0.0, PI),
        ],
    ),
    (
        "h",
        &[
            line([-30.0, -80.0], [-30.0, 80.0]),
            arc([5.0, 20.0], 35.0, PI, PI),
            line([40.0, 20.0], [40.0, 80.0]),
        ],
    ),
    (
        "i",
        &[
            line([0.0, -10.0], [0.0, 80.0]),
            line([0.0, -45.0], [0.0, -38.0]),
        ],
    ),
    (
        "j",
        &[
            line([10.0, -10.0], [10.0, 85.0]),
            arc([-15.0, 85.0], 25.0, 0.0, PI),
            line([10.0, -45.0], [10.0, -38.0]),
        ],
    ),
    (
        "k",
        &[
            line([-30.0, -80.0], [-30.0, 80.0]),
            line([30.0, -10.0], [-30.0, 45.0]),
            line([-10.0, 30.0], [35.0, 80.0]),
        ],
    ),
    ("l", &[line([0.0, -80.0], [0.0, 80.0])]),
    (
        "m",
        &[
            line([-50.0, -10.0], [-50.0, 80.0]),
            arc([-25.0, 15.0], 25.0, PI, PI),
            line([0.0, 15.0], [0.0, 80.0]),
            arc([25.0, 15.0], 25.0, PI, PI),
            line([50.0, 15.0], [50.0, 80.0]),
        ],
    ),
    (
        "n",
        &[
            line([-30.0, -10.0], [-30.0, 80.0]),
            arc([5.0, 25.0], 35.0, PI, PI),
            line([40.0, 25.0], [40.0, 80.0]),
        ],
    ),
    ("o", &[arc([0.0, 40.0], 40.0, -HALF_PI, -TAU)]),
    (
        "p",
        &[
            line([-30.0, -10.0], [-30.0, 100.0]),
            arc([5.0, 35.0], 35.0, PI, TAU),
        ],
    ),
    (
        "q",
        &[
            arc([-5.0, 35.0], 35.0, 0.0, -TAU),
            line([30.0, -10.0], [30.0, 100.0]),
        ],
    ),
    (
        "r",
        &[
            line([-20.0, -10.0], [-20.0, 80.0]),
            quad([-20.0, 20.0], [-10.0, -15.0], [30.0, -5.0]),
        ],
    ),
    (
        "s",
        &[
            arc([0.0, 15.0], 22.0, -PI * 0.25, -PI * 1.25),
            arc([0.0, 59.0], 22.0, -HALF_PI, PI * 1.25),
        ],
    ),
    (
        "t",
        &[
            line([0.0, -60.0], [0.0, 60.0]),
            quad([0.0, 60.0], [0.0, 85.0], [30.0, 75.0]),
            line([-25.0, -10.0], [25.0, -10.0]),
        ],
    ),
    (
        "u",
        &[
            line([-35.0, -10.0], [-35.0, 45.0]),
            arc([0.0, 45.0], 35.0, PI, -PI),
            line([35.0, -10.0], [35.0, 80.0]),
        ],
    ),
    (
        "v",
        &[
            line([-40.0, -10.0], [0.0, 80.0]),
            line([0.0, 80.0], [40.0, -10.0]),
        ],
    ),
    (
        "w",
        &[
            line([-50.0, -10.0], [-25.0, 80.0]),
            line([-25.0, 80.0], [0.0, 10.0]),
            line([0.0, 10.0], [25.0, 80.0]),
            line([25.0, 80.0], [50.0, -10.0]),
        ],
    ),
    (
        "x",
        &[
            line([-35.0, -10.0], [35.0, 80.0]),
            line([35.0, -10.0], [-35.0, 80.0]),
        ],
    ),
    (
        "y",
        &[
            line([-35.0, -10.0], [0.0, 60.0]),
            line([35.0, -10.0], [-15.0, 100.0]),
        ],
    ),
    (
        "z",
        &[
            line([-35.0, -10.0], [35.0, -10.0]),
            line([35.0, -10.0], [-35.0, 80.0]),
            line([-35.0, 80.0], [35.0, 80.0]),
        ],
    ),
];
