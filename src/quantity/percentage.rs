quantity!(Percentage, suffix: "%", precision: 1);
