//! Synthetic value pools and generators for the seeder.
//!
//! Fixed in-repo pools stand in for an external fake-data service; every
//! generator takes the RNG explicitly so seeded runs are reproducible.

use chrono::{Datelike, Days, NaiveDate};
use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alma", "Amir", "Anna", "Arthur", "Astrid", "Bruno", "Camille", "Carlos", "Clara",
    "Daniel", "Elena", "Emil", "Esther", "Felix", "Greta", "Hana", "Hugo", "Ines", "Ivan",
    "Jonas", "Julia", "Kenji", "Laila", "Leo", "Lucia", "Marek", "Maria", "Mateo", "Mina",
    "Nadia", "Nils", "Olga", "Omar", "Paula", "Ravi", "Rosa", "Samuel", "Sofia", "Tomas",
    "Vera", "Yusuf", "Zara", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Almeida", "Andersen", "Baptiste", "Becker", "Bianchi", "Blanchard", "Castellanos", "Chen",
    "Dubois", "Eriksson", "Falk", "Fernandez", "Fischer", "Garnier", "Haddad", "Hoffmann",
    "Ibarra", "Jansen", "Kowalski", "Larsen", "Lindgren", "Marchetti", "Mendoza", "Moreau",
    "Nakamura", "Novak", "Okafor", "Olsen", "Ortega", "Petrov", "Quintero", "Rahman", "Rossi",
    "Santos", "Schneider", "Silva", "Takahashi", "Vargas", "Weber", "Zielinski",
];

const COUNTRIES: &[&str] = &[
    "Argentina", "Australia", "Austria", "Belgium", "Brazil", "Bulgaria", "Canada", "Chile",
    "Colombia", "Croatia", "Czech Republic", "Denmark", "Egypt", "Estonia", "Finland", "France",
    "Germany", "Ghana", "Greece", "Hungary", "Iceland", "India", "Indonesia", "Ireland", "Italy",
    "Japan", "Kenya", "Latvia", "Lithuania", "Mexico", "Morocco", "Netherlands", "New Zealand",
    "Nigeria", "Norway", "Peru", "Poland", "Portugal", "Romania", "Slovakia", "Slovenia",
    "South Korea", "Spain", "Sweden", "Switzerland", "Turkey", "Uruguay", "Vietnam",
];

const TITLE_WORDS: &[&str] = &[
    "amber", "ancient", "ashes", "autumn", "beneath", "between", "bitter", "broken", "burning",
    "chronicle", "circle", "crimson", "crossing", "crown", "distant", "dream", "echo", "empire",
    "ember", "evening", "fallen", "forgotten", "garden", "gathering", "glass", "golden", "harbor",
    "hidden", "hollow", "horizon", "hour", "iron", "island", "journey", "kingdom", "lantern",
    "last", "letters", "light", "lost", "meridian", "midnight", "mirror", "morning", "mountain",
    "night", "north", "ocean", "orchard", "paper", "quiet", "rain", "river", "salt", "season",
    "shadow", "silent", "silver", "sleeping", "song", "stone", "storm", "summer", "thread",
    "tide", "tower", "voyage", "waking", "water", "winter",
];

/// Random first/last name pair.
pub fn person_name<R: Rng + ?Sized>(rng: &mut R) -> (String, String) {
    let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
    (first.to_string(), last.to_string())
}

/// Random country name.
pub fn country<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    COUNTRIES[rng.gen_range(0..COUNTRIES.len())]
}

/// Word-salad book title: 3-5 random words, each title-cased.
pub fn book_title<R: Rng + ?Sized>(rng: &mut R) -> String {
    let words = rng.gen_range(3..=5);
    let mut title = String::new();
    for i in 0..words {
        if i > 0 {
            title.push(' ');
        }
        title.push_str(&title_case(TITLE_WORDS[rng.gen_range(0..TITLE_WORDS.len())]));
    }
    title
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Uniform date in the window starting `years` before `today` (inclusive)
/// and ending at `today`.
pub fn date_within_years<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate, years: i32) -> NaiveDate {
    date_between(rng, years_before(today, years), today)
}

/// Uniform birth date giving an age in `[min_age, max_age]` as of `today`.
pub fn birth_date<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
    min_age: i32,
    max_age: i32,
) -> NaiveDate {
    date_between(rng, years_before(today, max_age), years_before(today, min_age))
}

/// Uniform date in `[start, end]`.
fn date_between<R: Rng + ?Sized>(rng: &mut R, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    let span = (end - start).num_days().max(0) as u64;
    start + Days::new(rng.gen_range(0..=span))
}

/// `date` shifted `years` back; Feb 29 clamps to Feb 28 in non-leap years.
fn years_before(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year() - years;
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn titles_are_three_to_five_capitalized_words() {
        let mut rng = rng();
        for _ in 0..200 {
            let title = book_title(&mut rng);
            let words: Vec<&str> = title.split(' ').collect();
            assert!((3..=5).contains(&words.len()), "bad title: {title:?}");
            for word in words {
                assert!(
                    word.chars().next().unwrap().is_uppercase(),
                    "uncapitalized word in {title:?}"
                );
            }
        }
    }

    #[test]
    fn birth_dates_stay_inside_age_window() {
        let mut rng = rng();
        let today = date(2024, 6, 15);
        for _ in 0..500 {
            let birth = birth_date(&mut rng, today, 15, 100);
            assert!(birth >= date(1924, 6, 15), "too old: {birth}");
            assert!(birth <= date(2009, 6, 15), "too young: {birth}");
        }
    }

    #[test]
    fn release_dates_stay_inside_window() {
        let mut rng = rng();
        let today = date(2024, 6, 15);
        for _ in 0..500 {
            let release = date_within_years(&mut rng, today, 30);
            assert!(release >= date(1994, 6, 15));
            assert!(release <= today);
        }
    }

    #[test]
    fn leap_day_clamps() {
        assert_eq!(years_before(date(2024, 2, 29), 1), date(2023, 2, 28));
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let a = book_title(&mut StdRng::seed_from_u64(7));
        let b = book_title(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
