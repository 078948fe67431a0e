pub const CAPITALS: &[(&str, &[&str])] = &[
    ("Argentina", &["Buenos Aires"]),
    ("Australia", &["Canberra"]),
    ("Austria", &["Vienna"]),
    ("Belgium", &["Brussels"]),
    ("Bhutan", &["Thimphu"]),
    ("Bolivia", &["Sucre", "La Paz"]),
    ("Brazil", &["Brasilia", "Brasília"]),
    ("Burkina Faso", &["Ouagadougou"]),
    ("Canada", &["Ottawa"]),
    ("Chile", &["Santiago"]),
    ("China", &["Beijing"]),
    ("Colombia", &["Bogota", "Bogotá"]),
    ("Egypt", &["Cairo"]),
    ("Eritrea", &["Asmara"]),
    ("Finland", &["Helsinki"]),
    ("France", &["Paris"]),
    ("Germany", &["Berlin"]),
    ("Greece", &["Athens"]),
    ("India", &["New Delhi"]),
    ("Ireland", &["Dublin"]),
    ("Italy", &["Rome"]),
    ("Japan", &["Tokyo"]),
    ("Kazakhstan", &["Astana"]),
    ("Kenya", &["Nairobi"]),
    ("Kyrgyzstan", &["Bishkek"]),
    ("Laos", &["Vientiane"]),
    ("Madagascar", &["Antananarivo"]),
    ("Malaysia", &["Kuala Lumpur"]),
    ("Mexico", &["Mexico City"]),
    ("Mongolia", &["Ulaanbaatar", "Ulan Bator"]),
    ("Morocco", &["Rabat"]),
    ("Myanmar", &["Naypyidaw", "Nay Pyi Taw"]),
    ("Netherlands", &["Amsterdam"]),
    ("New Zealand", &["Wellington"]),
    ("Nigeria", &["Abuja"]),
    ("Norway", &["Oslo"]),
    ("Pakistan", &["Islamabad"]),
    ("Palau", &["Ngerulmud"]),
    ("Peru", &["Lima"]),
    ("Poland", &["Warsaw"]),
    ("Portugal", &["Lisbon"]),
    ("Russia", &["Moscow"]),
    ("South Africa", &["Pretoria", "Cape Town", "Bloemfontein"]),
    ("South Korea", &["Seoul"]),
    ("Spain", &["Madrid"]),
    ("Sri Lanka", &["Sri Jayawardenepura Kotte", "Kotte", "Colombo"]),
    ("Sweden", &["Stockholm"]),
    ("Switzerland", &["Bern", "Berne"]),
    ("Tajikistan", &["Dushanbe"]),
    ("Thailand", &["Bangkok"]),
    ("Turkey", &["Ankara"]),
    ("Tuvalu", &["Funafuti"]),
    ("United Kingdom", &["London"]),
    ("United States", &["Washington DC", "Washington D.C.", "Washington"]),
    ("Uruguay", &["Montevideo"]),
    ("Vanuatu", &["Port Vila"]),
    ("Vietnam", &["Hanoi"]),
];

pub const EASY: &[&str] = &[
    "Canada",
    "China",
    "Egypt",
    "France",
    "Germany",
    "Greece",
    "Ireland",
    "Italy",
    "Japan",
    "Mexico",
    "Norway",
    "Russia",
    "South Korea",
    "Spain",
    "United Kingdom",
    "United States",
];

pub const MEDIUM: &[&str] = &[
    "Argentina",
    "Australia",
    "Austria",
    "Belgium",
    "Brazil",
    "Chile",
    "Colombia",
    "Finland",
    "India",
    "Kenya",
    "Netherlands",
    "New Zealand",
    "Peru",
    "Poland",
    "Portugal",
    "Sweden",
    "Switzerland",
    "Thailand",
    "Turkey",
    "Vietnam",
];

pub const HARD: &[&str] = &[
    "Bhutan",
    "Bolivia",
    "Burkina Faso",
    "Eritrea",
    "Kazakhstan",
    "Kyrgyzstan",
    "Laos",
    "Madagascar",
    "Malaysia",
    "Mongolia",
    "Morocco",
    "Myanmar",
    "Nigeria",
    "Pakistan",
    "Palau",
    "South Africa",
    "Sri Lanka",
    "Tajikistan",
    "Tuvalu",
    "Uruguay",
    "Vanuatu",
];
