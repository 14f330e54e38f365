// data.rs - Raw Cornell Box geometry, millimeters.
//
// The classic reference scene: ceiling light quad, room walls, two boxes
// and the camera rig. Components are flat, three per point.

/// Ceiling light quad, 4 corners on the y = 548.8 plane.
pub const LIGHTS: [f64; 12] = [
    343.0, 548.8, 227.0, //
    343.0, 548.8, 332.0, //
    213.0, 548.8, 332.0, //
    213.0, 548.8, 227.0,
];

/// Room walls, 8 corners. The box is slightly skewed: the two right-hand
/// floor corners sit at x = 552.8 and x = 549.6, not 556.
pub const ROOM: [f64; 24] = [
    0.0, 0.0, 0.0, //
    0.0, 0.0, 559.2, //
    0.0, 548.8, 0.0, //
    0.0, 548.8, 559.2, //
    552.8, 0.0, 0.0, //
    549.6, 0.0, 559.2, //
    556.0, 548.8, 0.0, //
    556.0, 548.8, 559.2,
];

/// Short box, 8 corners.
pub const SHORT_BLOCK: [f64; 24] = [
    290.0, 0.0, 114.0, //
    290.0, 165.0, 114.0, //
    240.0, 0.0, 272.0, //
    240.0, 165.0, 272.0, //
    82.0, 0.0, 225.0, //
    82.0, 165.0, 225.0, //
    130.0, 0.0, 65.0, //
    130.0, 165.0, 65.0,
];

/// Tall box, 8 corners.
pub const TALL_BLOCK: [f64; 24] = [
    423.0, 0.0, 247.0, //
    423.0, 330.0, 247.0, //
    472.0, 0.0, 406.0, //
    472.0, 330.0, 406.0, //
    314.0, 0.0, 456.0, //
    314.0, 330.0, 456.0, //
    265.0, 0.0, 296.0, //
    265.0, 330.0, 296.0,
];

/// Camera rig rows: eye, look-at, up.
pub const CAMERA: [f64; 9] = [
    278.0, 273.0, -800.0, //
    278.0, 273.0, 279.6, //
    0.0, 1.0, 0.0,
];
