quantity!(LitresPerHour, suffix: "L/hr", precision: 2);
