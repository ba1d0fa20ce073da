quantity!(SquareFeet, suffix: "sq ft", precision: 0);
