//! Built-in choreography tables. Each slot is `(name, [dx, dy, dz, droll, dpitch, dyaw])`
//! in centimetres and degrees relative to the rest pose.

pub(super) struct RawTemplate {
    pub label: &'static str,
    pub slots: [(&'static str, [f32; 6]); 8],
}

pub(super) const LOW_TEMPLATES: [RawTemplate; 10] = [
    RawTemplate {
        label: "GentleNod",
        slots: [
            ("Gentle nod down", [0.0, 0.0, 0.0, 0.0, -22.0, 0.0]),
            ("Gentle nod up", [0.0, 0.0, 0.0, 0.0, 18.0, 0.0]),
            ("Gentle nod down", [0.0, 0.0, 0.0, 0.0, -22.0, 0.0]),
            ("Gentle nod up", [0.0, 0.0, 0.0, 0.0, 18.0, 0.0]),
            ("Gentle nod down", [0.0, 0.0, 0.0, 0.0, -22.0, 0.0]),
            ("Gentle nod up", [0.0, 0.0, 0.0, 0.0, 18.0, 0.0]),
            ("Gentle nod down", [0.0, 0.0, 0.0, 0.0, -22.0, 0.0]),
            ("Gentle nod up", [0.0, 0.0, 0.0, 0.0, 18.0, 0.0]),
        ],
    },
    RawTemplate {
        label: "SoftTurn",
        slots: [
            ("Soft turn left", [0.0, 0.0, 0.0, 0.0, 0.0, -18.0]),
            ("Soft turn right", [0.0, 0.0, 0.0, 0.0, 0.0, 18.0]),
            ("Soft turn left", [0.0, 0.0, 0.0, 0.0, 0.0, -18.0]),
            ("Soft turn right", [0.0, 0.0, 0.0, 0.0, 0.0, 18.0]),
            ("Soft turn left", [0.0, 0.0, 0.0, 0.0, 0.0, -18.0]),
            ("Soft turn right", [0.0, 0.0, 0.0, 0.0, 0.0, 18.0]),
            ("Soft turn left", [0.0, 0.0, 0.0, 0.0, 0.0, -18.0]),
            ("Soft turn right", [0.0, 0.0, 0.0, 0.0, 0.0, 18.0]),
        ],
    },
    RawTemplate {
        label: "LightTilt",
        slots: [
            ("Light tilt left", [0.0, 0.0, 0.0, -15.0, 0.0, 0.0]),
            ("Light tilt right", [0.0, 0.0, 0.0, 15.0, 0.0, 0.0]),
            ("Light tilt left", [0.0, 0.0, 0.0, -15.0, 0.0, 0.0]),
            ("Light tilt right", [0.0, 0.0, 0.0, 15.0, 0.0, 0.0]),
            ("Light tilt left", [0.0, 0.0, 0.0, -15.0, 0.0, 0.0]),
            ("Light tilt right", [0.0, 0.0, 0.0, 15.0, 0.0, 0.0]),
            ("Light tilt left", [0.0, 0.0, 0.0, -15.0, 0.0, 0.0]),
            ("Light tilt right", [0.0, 0.0, 0.0, 15.0, 0.0, 0.0]),
        ],
    },
    RawTemplate {
        label: "Gentle",
        slots: [
            ("Gentle nod down", [0.0, 0.0, 0.0, 0.0, -12.0, 0.0]),
            ("Gentle nod up", [0.0, 0.0, 0.0, 0.0, 8.0, 0.0]),
            ("Soft turn left", [0.0, 0.0, 0.0, 0.0, 0.0, -18.0]),
            ("Soft turn right", [0.0, 0.0, 0.0, 0.0, 0.0, 18.0]),
            ("Light tilt left", [0.0, 0.0, 0.0, -15.0, 0.0, 0.0]),
            ("Light tilt right", [0.0, 0.0, 0.0, 15.0, 0.0, 0.0]),
            ("Gentle pitch forward", [0.0, 0.0, 0.0, 0.0, -8.0, 0.0]),
            ("Gentle pitch back", [0.0, 0.0, 0.0, 0.0, 6.0, 0.0]),
        ],
    },
    RawTemplate {
        label: "Explore",
        slots: [
            ("Gentle pitch down", [0.0, 0.0, 0.0, 0.0, -18.0, 0.0]),
            ("Gentle tilt left", [0.0, 0.0, 0.0, -20.0, 0.0, -12.0]),
            ("Minimal turn left", [0.0, 0.0, 0.0, -15.0, 0.0, -15.0]),
            ("Minimal turn right", [0.0, 0.0, 0.0, 15.0, 0.0, 15.0]),
            ("Gentle pitch forward", [0.0, 0.0, 0.0, 0.0, -16.0, 0.0]),
            ("Gentle tilt right", [0.0, 0.0, 0.0, 15.0, 0.0, 12.0]),
            ("Light roll left", [0.0, 0.0, 0.0, -22.0, 0.0, -8.0]),
            ("Light roll right", [0.0, 0.0, 0.0, 22.0, 0.0, 8.0]),
        ],
    },
    RawTemplate {
        label: "Contemplative",
        slots: [
            ("Thoughtful nod", [0.0, 0.0, 0.0, 0.0, -10.0, 0.0]),
            ("Curious tilt left", [0.0, 0.0, 0.0, -8.0, 0.0, -12.0]),
            ("Ponder left turn", [0.0, 0.0, 0.0, -6.0, 0.0, -16.0]),
            ("Ponder right turn", [0.0, 0.0, 0.0, 6.0, 0.0, 16.0]),
            ("Meditative tilt right", [0.0, 0.0, 0.0, 12.0, -2.0, 10.0]),
            ("Peaceful center", [0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            ("Gentle roll left", [0.0, 0.0, 0.0, -10.0, 2.0, -8.0]),
            ("Gentle roll right", [0.0, 0.0, 0.0, 10.0, 2.0, 8.0]),
        ],
    },
    RawTemplate {
        label: "Drift",
        slots: [
            ("Gentle turn left", [0.0, 0.0, 0.0, -6.0, 0.0, -14.0]),
            ("Gentle pitch forward", [0.0, 0.0, 0.0, 0.0, -8.0, 0.0]),
            ("Gentle turn right", [0.0, 0.0, 0.0, 6.0, 0.0, 14.0]),
            ("Gentle pitch back", [0.0, 0.0, 0.0, 0.0, 6.0, 0.0]),
            ("Subtle tilt left", [0.0, 0.0, 0.0, -10.0, 4.0, -8.0]),
            ("Subtle nod down", [0.0, 0.0, 0.0, 0.0, -10.0, 0.0]),
            ("Subtle tilt right", [0.0, 0.0, 0.0, 10.0, 4.0, 8.0]),
            ("Return to center", [0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
        ],
    },
    RawTemplate {
        label: "Breathing",
        slots: [
            ("Inhale up", [0.0, 0.0, 0.0, 0.0, 10.0, 0.0]),
            ("Hold gentle", [0.0, 0.0, 0.0, 0.0, 8.0, 0.0]),
            ("Exhale down", [0.0, 0.0, 0.0, 0.0, -8.0, 0.0]),
            ("Rest center", [0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            ("Inhale left", [0.0, 0.0, 0.0, -12.0, 6.0, -10.0]),
            ("Hold left", [0.0, 0.0, 0.0, -8.0, 8.0, -12.0]),
            ("Exhale right", [0.0, 0.0, 0.0, 12.0, 6.0, 10.0]),
            ("Rest right", [0.0, 0.0, 0.0, 8.0, 0.0, 12.0]),
        ],
    },
    RawTemplate {
        label: "Circles",
        slots: [
            ("Circle start top", [0.0, 0.0, 0.0, 0.0, 18.0, 0.0]),
            ("Circle right", [0.0, 0.0, 0.0, 8.0, 16.0, 10.0]),
            ("Circle bottom", [0.0, 0.0, 0.0, 0.0, -18.0, 0.0]),
            ("Circle left", [0.0, 0.0, 0.0, -8.0, 16.0, -10.0]),
            ("Small circle top", [0.0, 0.0, 0.0, 0.0, 16.0, 0.0]),
            ("Small circle right", [0.0, 0.0, 0.0, 6.0, 14.0, 8.0]),
            ("Small circle bottom", [0.0, 0.0, 0.0, 0.0, -16.0, 0.0]),
            ("Small circle left", [0.0, 0.0, 0.0, -6.0, 14.0, -8.0]),
        ],
    },
    RawTemplate {
        label: "Micro",
        slots: [
            ("Micro turn left", [0.0, 0.0, 0.0, -14.0, 0.0, -8.0]),
            ("Micro turn right", [0.0, 0.0, 0.0, 14.0, 0.0, 8.0]),
            ("Micro pitch up", [0.0, 0.0, 0.0, 0.0, 16.0, 0.0]),
            ("Micro pitch down", [0.0, 0.0, 0.0, 0.0, -16.0, 0.0]),
            ("Micro pitch forward", [0.0, 0.0, 0.0, 0.0, -15.0, 0.0]),
            ("Micro pitch back", [0.0, 0.0, 0.0, 0.0, 15.0, 0.0]),
            ("Micro tilt left", [0.0, 0.0, 0.0, -8.0, 13.0, -6.0]),
            ("Micro tilt right", [0.0, 0.0, 0.0, 8.0, 13.0, 6.0]),
        ],
    },
];

pub(super) const MEDIUM_TEMPLATES: [RawTemplate; 11] = [
    RawTemplate {
        label: "NodUpDown",
        slots: [
            ("Sharp nod down", [0.0, 0.0, 0.0, 0.0, -21.0, 0.0]),
            ("Head up", [0.0, 0.0, 1.9, 0.0, 13.0, 0.0]),
            ("Sharp nod down", [0.0, 0.0, 0.0, 0.0, -21.0, 0.0]),
            ("Head up", [0.0, 0.0, 1.9, 0.0, 13.0, 0.0]),
            ("Sharp nod down", [0.0, 0.0, 0.0, 0.0, -21.0, 0.0]),
            ("Head up", [0.0, 0.0, 1.9, 0.0, 13.0, 0.0]),
            ("Sharp nod down", [0.0, 0.0, 0.0, 0.0, -21.0, 0.0]),
            ("Head up", [0.0, 0.0, 1.9, 0.0, 13.0, 0.0]),
        ],
    },
    RawTemplate {
        label: "TurnLeftRight",
        slots: [
            ("Head turn left", [0.0, 0.0, 0.0, 0.0, 0.0, -26.0]),
            ("Head turn right", [0.0, 0.0, 0.0, 0.0, 0.0, 26.0]),
            ("Head turn left", [0.0, 0.0, 0.0, 0.0, 0.0, -26.0]),
            ("Head turn right", [0.0, 0.0, 0.0, 0.0, 0.0, 26.0]),
            ("Head turn left", [0.0, 0.0, 0.0, 0.0, 0.0, -26.0]),
            ("Head turn right", [0.0, 0.0, 0.0, 0.0, 0.0, 26.0]),
            ("Head turn left", [0.0, 0.0, 0.0, 0.0, 0.0, -26.0]),
            ("Head turn right", [0.0, 0.0, 0.0, 0.0, 0.0, 26.0]),
        ],
    },
    RawTemplate {
        label: "LeanForwardBack",
        slots: [
            ("Lean left forward", [0.0, 1.6, 0.0, -21.0, -4.0, 0.0]),
            ("Lean right back", [0.0, -1.6, 0.0, 21.0, 4.0, 0.0]),
            ("Lean left forward", [0.0, 1.6, 0.0, -21.0, -4.0, 0.0]),
            ("Lean right back", [0.0, -1.6, 0.0, 21.0, 4.0, 0.0]),
            ("Lean left forward", [0.0, 1.6, 0.0, -21.0, -4.0, 0.0]),
            ("Lean right back", [0.0, -1.6, 0.0, 21.0, 4.0, 0.0]),
            ("Lean left forward", [0.0, 1.6, 0.0, -21.0, -4.0, 0.0]),
            ("Lean right back", [0.0, -1.6, 0.0, 21.0, 4.0, 0.0]),
        ],
    },
    RawTemplate {
        label: "Classic",
        slots: [
            ("Sharp nod down", [0.0, 0.0, 0.0, 0.0, -19.0, 0.0]),
            ("Head up", [0.0, 0.0, 1.5, 0.0, 11.0, 0.0]),
            ("Head turn left", [0.0, 0.0, 0.0, 0.0, 0.0, -22.0]),
            ("Head turn right", [0.0, 0.0, 0.0, 0.0, 0.0, 22.0]),
            ("Lean left forward", [0.0, 1.5, 0.0, -19.0, -4.0, 0.0]),
            ("Lean right back", [0.0, -1.5, 0.0, 19.0, 4.0, 0.0]),
            ("Center nod down", [0.0, 0.0, 0.0, 0.0, -15.0, 0.0]),
            ("Center lift up", [0.0, 0.0, 1.5, 0.0, 9.0, 0.0]),
        ],
    },
    RawTemplate {
        label: "Rhythmic",
        slots: [
            ("Bob down center", [0.0, 0.0, -0.8, 0.0, -22.0, 0.0]),
            ("Bob up left", [0.0, 0.0, 1.5, -15.0, 15.0, -15.0]),
            ("Bob down center", [0.0, 0.8, 0.0, 0.0, -15.0, 0.0]),
            ("Bob up right", [0.0, 0.0, 1.5, 15.0, 15.0, 15.0]),
            ("Side lean left", [0.0, 0.0, 0.0, -22.0, 0.0, -11.0]),
            ("Center nod", [0.0, 0.8, 0.0, 0.0, -11.0, 0.0]),
            ("Side lean right", [0.0, 0.0, 0.0, 22.0, 0.0, 11.0]),
            ("Upward lift", [0.0, 0.0, 2.2, 0.0, 8.0, 0.0]),
        ],
    },
    RawTemplate {
        label: "Flow",
        slots: [
            ("Flow start left", [0.0, 0.8, 0.8, -15.0, -8.0, -19.0]),
            ("Flow down center", [0.0, 1.5, -0.8, 0.0, -19.0, 0.0]),
            ("Flow right up", [0.0, 0.8, 1.5, 15.0, 11.0, 19.0]),
            ("Flow back center", [0.0, -0.8, 0.8, 0.0, 15.0, 0.0]),
            ("Flow diagonal 1", [0.0, 1.5, 0.0, -19.0, -11.0, -15.0]),
            ("Flow diagonal 2", [0.0, -0.8, 1.5, 11.0, 15.0, 11.0]),
            ("Flow circle left", [0.0, 0.0, 0.8, -11.0, -4.0, -22.0]),
            ("Flow circle right", [0.0, 0.0, 0.8, 11.0, -4.0, 22.0]),
        ],
    },
    RawTemplate {
        label: "Waves",
        slots: [
            ("Wave left start", [0.0, 0.8, 0.0, -13.0, -6.0, -15.0]),
            ("Wave center dip", [0.0, 0.0, -0.8, 0.0, -11.0, 0.0]),
            ("Wave right rise", [0.0, 0.8, 0.8, 13.0, 8.0, 15.0]),
            ("Wave back center", [0.0, -0.8, 0.0, 0.0, 9.0, 0.0]),
            ("Wave forward left", [0.0, 1.5, 0.0, -11.0, -8.0, -11.0]),
            ("Wave up right", [0.0, 0.0, 1.5, 11.0, 11.0, 11.0]),
            ("Wave down left", [0.0, -0.8, -0.8, -9.0, -9.0, -13.0]),
            ("Wave reset center", [0.0, 0.8, 0.8, 0.0, 6.0, 0.0]),
        ],
    },
    RawTemplate {
        label: "Emphasis",
        slots: [
            ("Emphasis left nod", [0.0, 0.0, 0.0, -15.0, -13.0, -19.0]),
            ("Soft center up", [0.0, 0.0, 0.8, 0.0, 8.0, 0.0]),
            ("Emphasis right nod", [0.0, 0.0, 0.0, 15.0, -13.0, 19.0]),
            ("Soft center up", [0.0, 0.0, 0.8, 0.0, 8.0, 0.0]),
            ("Strong forward", [0.0, 2.2, 0.0, 0.0, -16.0, 0.0]),
            ("Gentle back", [0.0, -0.8, 0.8, 0.0, 6.0, 0.0]),
            ("Side emphasis left", [0.0, 0.8, 0.0, -19.0, 0.0, -15.0]),
            ("Side emphasis right", [0.0, 0.8, 0.0, 19.0, 0.0, 15.0]),
        ],
    },
    RawTemplate {
        label: "Figure8",
        slots: [
            ("Figure-8 start", [0.0, 1.0, 1.0, -15.0, -10.0, -18.0]),
            ("Figure-8 cross center", [0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            ("Figure-8 right loop", [0.0, 1.0, 1.0, 15.0, 10.0, 18.0]),
            ("Figure-8 back cross", [0.0, -1.0, -1.0, 0.0, 5.0, 0.0]),
            ("Figure-8 left down", [0.0, 0.0, -1.0, -18.0, -15.0, -20.0]),
            ("Figure-8 up cross", [0.0, 1.0, 1.0, 0.0, 12.0, 0.0]),
            ("Figure-8 right down", [0.0, 0.0, -1.0, 18.0, -15.0, 20.0]),
            ("Figure-8 complete", [0.0, -1.0, 0.0, 0.0, 8.0, 0.0]),
        ],
    },
    RawTemplate {
        label: "Pulse",
        slots: [
            ("Pulse out left", [0.0, 1.0, 0.0, -22.0, 0.0, -20.0]),
            ("Pulse in center", [0.0, -1.0, 0.0, 0.0, 0.0, 0.0]),
            ("Pulse out right", [0.0, 1.0, 0.0, 22.0, 0.0, 20.0]),
            ("Pulse in center", [0.0, -1.0, 0.0, 0.0, 0.0, 0.0]),
            ("Pulse up forward", [0.0, 2.0, 2.0, 0.0, -18.0, 0.0]),
            ("Pulse down back", [0.0, -1.0, -1.0, 0.0, 15.0, 0.0]),
            ("Pulse diagonal left", [0.0, 1.0, 1.0, -20.0, -12.0, -15.0]),
            ("Pulse diagonal right", [0.0, 1.0, 1.0, 20.0, -12.0, 15.0]),
        ],
    },
    RawTemplate {
        label: "Translation",
        slots: [
            ("Smooth right glide", [2.2, 0.0, 0.0, 0.0, 0.0, 0.0]),
            ("Smooth left glide", [-2.2, 0.0, 0.0, 0.0, 0.0, 0.0]),
            ("Smooth forward glide", [0.0, 2.2, 0.0, 0.0, 0.0, 0.0]),
            ("Smooth backward glide", [0.0, -2.2, 0.0, 0.0, 0.0, 0.0]),
            ("Smooth up glide", [0.0, 0.0, 2.2, 0.0, 0.0, 0.0]),
            ("Smooth down glide", [0.0, 0.0, -2.2, 0.0, 0.0, 0.0]),
            ("Smooth diagonal out", [1.6, 1.6, 0.0, 0.0, 0.0, 0.0]),
            ("Smooth diagonal in", [-1.6, -1.6, 0.0, 0.0, 0.0, 0.0]),
        ],
    },
];

pub(super) const HIGH_TEMPLATES: [RawTemplate; 11] = [
    RawTemplate {
        label: "LeftRight",
        slots: [
            ("Sharp snap left", [0.0, 0.5, 0.25, -15.0, 0.0, -24.0]),
            ("Sharp snap right", [0.0, 0.5, 0.25, 15.0, 0.0, 24.0]),
            ("Sharp snap left", [0.0, 0.5, 0.25, -15.0, 0.0, -24.0]),
            ("Sharp snap right", [0.0, 0.5, 0.25, 15.0, 0.0, 24.0]),
            ("Sharp snap left", [0.0, 0.5, 0.25, -15.0, 0.0, -24.0]),
            ("Sharp snap right", [0.0, 0.5, 0.25, 15.0, 0.0, 24.0]),
            ("Sharp snap left", [0.0, 0.5, 0.25, -15.0, 0.0, -24.0]),
            ("Sharp snap right", [0.0, 0.5, 0.25, 15.0, 0.0, 24.0]),
        ],
    },
    RawTemplate {
        label: "UpDown",
        slots: [
            ("Strong head drop", [0.0, 0.0, -1.9, 0.0, -22.0, 0.0]),
            ("Head snap up", [0.0, 0.0, 2.2, 0.0, 19.0, 0.0]),
            ("Strong head drop", [0.0, 0.0, -1.9, 0.0, -22.0, 0.0]),
            ("Head snap up", [0.0, 0.0, 2.2, 0.0, 19.0, 0.0]),
            ("Strong head drop", [0.0, 0.0, -1.9, 0.0, -22.0, 0.0]),
            ("Head snap up", [0.0, 0.0, 2.2, 0.0, 19.0, 0.0]),
            ("Strong head drop", [0.0, 0.0, -1.9, 0.0, -22.0, 0.0]),
            ("Head snap up", [0.0, 0.0, 2.2, 0.0, 19.0, 0.0]),
        ],
    },
    RawTemplate {
        label: "ForwardBack",
        slots: [
            ("Head thrust forward", [0.0, 2.6, 0.0, 0.0, -9.0, 0.0]),
            ("Head jerk back", [0.0, -1.9, 0.0, 0.0, 11.0, 0.0]),
            ("Head thrust forward", [0.0, 2.6, 0.0, 0.0, -9.0, 0.0]),
            ("Head jerk back", [0.0, -1.9, 0.0, 0.0, 11.0, 0.0]),
            ("Head thrust forward", [0.0, 2.6, 0.0, 0.0, -9.0, 0.0]),
            ("Head jerk back", [0.0, -1.9, 0.0, 0.0, 11.0, 0.0]),
            ("Head thrust forward", [0.0, 2.6, 0.0, 0.0, -9.0, 0.0]),
            ("Head jerk back", [0.0, -1.9, 0.0, 0.0, 11.0, 0.0]),
        ],
    },
    RawTemplate {
        label: "SideVertical",
        slots: [
            ("Head snap left", [0.0, 0.0, 0.0, 0.0, 0.0, -28.0]),
            ("Head snap right", [0.0, 0.0, 0.0, 0.0, 0.0, 28.0]),
            ("Sharp head drop", [0.0, 0.0, -1.9, 0.0, -22.0, 0.0]),
            ("Head snap up", [0.0, 0.0, 2.2, 0.0, 19.0, 0.0]),
            ("Head thrust forward", [0.0, 2.6, 0.0, 0.0, -9.0, 0.0]),
            ("Head jerk back", [0.0, -1.9, 0.0, 0.0, 11.0, 0.0]),
            ("Strong tilt left", [0.0, 0.0, 0.0, -26.0, 0.0, 0.0]),
            ("Strong tilt right", [0.0, 0.0, 0.0, 26.0, 0.0, 0.0]),
        ],
    },
    RawTemplate {
        label: "Circular",
        slots: [
            ("Head whip left", [0.0, 0.0, 0.0, -24.0, 0.0, -27.0]),
            ("Head slam down", [0.0, 1.1, -1.9, 0.0, -26.0, 0.0]),
            ("Head whip right", [0.0, 0.0, 0.0, 24.0, 0.0, 27.0]),
            ("Head throw back", [0.0, -1.5, 1.9, 0.0, 21.0, 0.0]),
            ("Diagonal tilt left", [0.0, 0.8, 0.0, -24.0, -11.0, -15.0]),
            ("Power nod center", [0.0, 0.0, -1.1, 0.0, -24.0, 0.0]),
            ("Diagonal tilt right", [0.0, -0.8, 0.0, 24.0, -11.0, 15.0]),
            ("Head explosion up", [0.0, 0.0, 2.6, 0.0, 24.0, 0.0]),
        ],
    },
    RawTemplate {
        label: "ForwardBack",
        slots: [
            ("Head punch forward", [0.0, 3.0, 0.0, 0.0, -13.0, 0.0]),
            ("Head recoil back", [0.0, -2.2, 0.0, 0.0, 15.0, 0.0]),
            ("Forward lean left", [0.0, 1.9, -0.4, -21.0, -9.0, 0.0]),
            ("Back lean right", [0.0, -1.9, 0.4, 21.0, 9.0, 0.0]),
            ("Strong forward nod", [0.0, 2.2, -1.1, 0.0, -21.0, 0.0]),
            ("Sharp back tilt", [0.0, -1.5, 1.1, 0.0, 19.0, 0.0]),
            ("Side thrust left", [0.0, 0.0, 0.0, -24.0, 0.0, -26.0]),
            ("Side thrust right", [0.0, 0.0, 0.0, 24.0, 0.0, 26.0]),
        ],
    },
    RawTemplate {
        label: "Diagonal",
        slots: [
            ("Diagonal up-left", [0.0, 0.0, 2.5, -24.0, 16.0, -28.0]),
            ("Diagonal down-right", [0.0, 0.0, -2.5, 24.0, -16.0, 28.0]),
            ("Diagonal up-right", [0.0, 0.0, 2.5, 24.0, 16.0, 28.0]),
            ("Diagonal down-left", [0.0, 0.0, -2.5, -24.0, -16.0, -28.0]),
            ("Sharp diagonal left", [0.0, 0.0, 1.1, -24.0, 9.0, -24.0]),
            ("Sharp diagonal right", [0.0, 0.0, -1.1, 24.0, -9.0, 24.0]),
            ("Power diagonal up", [0.0, 0.0, 3.0, 0.0, 20.0, 0.0]),
            ("Power diagonal down", [0.0, 0.0, -3.0, 0.0, -20.0, 0.0]),
        ],
    },
    RawTemplate {
        label: "RapidFire",
        slots: [
            ("Quick left snap", [0.0, 0.0, 0.0, 0.0, 0.0, -24.0]),
            ("Quick right snap", [0.0, 0.0, 0.0, 0.0, 0.0, 24.0]),
            ("Quick up jerk", [0.0, 0.0, 2.5, 0.0, 20.0, 0.0]),
            ("Quick down slam", [0.0, 0.0, -2.5, 0.0, -20.0, 0.0]),
            ("Rapid left turn", [0.0, 1.5, 0.0, -20.0, 0.0, -28.0]),
            ("Rapid right turn", [0.0, -1.5, 0.0, 20.0, 0.0, 28.0]),
            ("Explosive forward", [0.0, 4.5, 0.0, 0.0, -24.0, 0.0]),
            ("Snap back center", [0.0, -2.5, 0.0, 0.0, 16.0, 0.0]),
        ],
    },
    RawTemplate {
        label: "Spiral",
        slots: [
            ("Spiral start left", [-1.5, 0.0, 0.8, -16.0, 8.0, -20.0]),
            ("Spiral forward", [0.0, 1.0, 1.5, 0.0, -12.0, -8.0]),
            ("Spiral right", [1.5, 1.5, 0.8, 16.0, 0.0, 20.0]),
            ("Spiral back", [0.8, -2.5, -0.8, 12.0, 16.0, 12.0]),
            ("Spiral down-left", [-2.5, -0.8, -1.5, -20.0, -8.0, -24.0]),
            ("Spiral up-forward", [0.8, 1.0, 2.5, 8.0, -16.0, 8.0]),
            ("Spiral complete right", [2.5, 0.8, 0.0, 24.0, 4.0, 28.0]),
            ("Spiral reset center", [0.0, -1.5, 0.8, 0.0, 12.0, 0.0]),
        ],
    },
    RawTemplate {
        label: "SharpAngles",
        slots: [
            ("Sharp left angle", [-1.0, 0.0, 0.0, -36.0, 0.0, -40.0]),
            ("Sharp right angle", [1.0, 0.0, 0.0, 36.0, 0.0, 40.0]),
            ("Sharp up angle", [0.0, 0.0, 1.0, 0.0, -36.0, 0.0]),
            ("Sharp down angle", [0.0, 0.0, -1.0, 0.0, 36.0, 0.0]),
            ("Corner left-up", [-0.5, 0.5, 2.5, -28.0, -20.0, -32.0]),
            ("Corner right-down", [0.5, -0.5, -2.5, 28.0, 20.0, 32.0]),
            ("Angular thrust", [1.5, 2.0, -0.8, 16.0, -28.0, 16.0]),
            ("Angular recoil", [-1.0, -2.0, 1.0, -16.0, 24.0, -16.0]),
        ],
    },
    RawTemplate {
        label: "Translation",
        slots: [
            ("Sharp right slide", [2.4, 0.0, 0.0, 0.0, 0.0, 0.0]),
            ("Sharp left slide", [-2.4, 0.0, 0.0, 0.0, 0.0, 0.0]),
            ("Sharp forward thrust", [0.0, 2.4, 0.0, 0.0, 0.0, 0.0]),
            ("Sharp backward pull", [0.0, -2.4, 0.0, 0.0, 0.0, 0.0]),
            ("Sharp up lift", [0.0, 0.0, 2.4, 0.0, 0.0, 0.0]),
            ("Sharp down drop", [0.0, 0.0, -2.4, 0.0, 0.0, 0.0]),
            ("Sharp diagonal out", [1.7, 1.7, 0.0, 0.0, 0.0, 0.0]),
            ("Sharp diagonal in", [-1.7, -1.7, 0.0, 0.0, 0.0, 0.0]),
        ],
    },
];

