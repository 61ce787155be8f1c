quantity!(Kilowatts, suffix: "kW", precision: 2);
