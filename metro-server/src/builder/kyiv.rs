//! Built-in network: a simplified Kyiv metro.

use super::spec::NetworkSpec;

const M1: [&str; 12] = [
    "Академмістечко",
    "Житомирська",
    "Шулявська",
    "Політехнічний інститут",
    "Вокзальна",
    "Університет",
    "Театральна",
    "Хрещатик",
    "Арсенальна",
    "Дніпро",
    "Лівобережна",
    "Лісова",
];

const M2: [&str; 11] = [
    "Героїв Дніпра",
    "Оболонь",
    "Почайна",
    "Поштова площа",
    "Майдан Незалежності",
    "Площа Українських Героїв",
    "Олімпійська",
    "Палац \"Україна\"",
    "Голосіївська",
    "Виставковий центр",
    "Теремки",
];

// Кловська is left out of the simplified map.
const M3: [&str; 10] = [
    "Сирець",
    "Лук'янівська",
    "Золоті ворота",
    "Палац спорту",
    "Печерська",
    "Звіринецька",
    "Осокорки",
    "Позняки",
    "Бориспільська",
    "Червоний хутір",
];

/// Interchanges between the three lines.
const TRANSFERS: [(&str, &str); 3] = [
    ("Театральна", "Золоті ворота"),
    ("Хрещатик", "Майдан Незалежності"),
    ("Площа Українських Героїв", "Палац спорту"),
];

/// The simplified Kyiv metro: lines M1, M2 and M3 joined by three interchanges.
pub fn kyiv_metro() -> NetworkSpec {
    let spec = NetworkSpec::default()
        .route("M1", M1)
        .route("M2", M2)
        .route("M3", M3);

    TRANSFERS
        .iter()
        .fold(spec, |spec, (from, to)| spec.transfer(from, to))
}
