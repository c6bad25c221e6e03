// Destinations offered within a tour and their fun/calm predicates

use chrono::{Datelike, NaiveDate};

use crate::error::DomainError;

const MIN_ATTRACTIONS: u32 = 3;
const MIN_POPULATION: u64 = 100_000;
const MAX_CALM_NOISE_DB: f64 = 20.0;

const OLD_TOWN_BEFORE_YEAR: i32 = 1800;
const LITORAL_PROVINCES: [&str; 3] = ["Entre Ríos", "Corrientes", "Misiones"];
const CALM_PROVINCE: &str = "La Pampa";

const MIN_BEACH_EXTENSION_METERS: u32 = 300;

#[derive(Debug, Clone, PartialEq)]
pub struct City {
    name: String,
    attraction_count: u32,
    population: u64,
    noise_level_db: f64,
}

impl City {
    fn is_particularly_fun(&self) -> bool {
        self.has_many_attractions() && self.is_densely_populated()
    }

    fn is_calm(&self) -> bool {
        self.noise_level_db < MAX_CALM_NOISE_DB
    }

    fn has_many_attractions(&self) -> bool {
        self.attraction_count > MIN_ATTRACTIONS
    }

    fn is_densely_populated(&self) -> bool {
        self.population > MIN_POPULATION
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Town {
    name: String,
    province: String,
    founded: NaiveDate,
}

impl Town {
    fn is_particularly_fun(&self) -> bool {
        self.is_old() && self.is_litoral()
    }

    fn is_calm(&self) -> bool {
        self.province == CALM_PROVINCE
    }

    fn is_old(&self) -> bool {
        self.founded.year() < OLD_TOWN_BEFORE_YEAR
    }

    fn is_litoral(&self) -> bool {
        LITORAL_PROVINCES.contains(&self.province.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeasideResort {
    name: String,
    extension_meters: u32,
    dangerous_sea: bool,
    pedestrian_boardwalk: bool,
}

impl SeasideResort {
    fn is_particularly_fun(&self) -> bool {
        self.extension_meters > MIN_BEACH_EXTENSION_METERS && self.dangerous_sea
    }

    fn is_calm(&self) -> bool {
        !self.pedestrian_boardwalk
    }
}

/// A place offered within a tour.
///
/// `is_fun` is always "name has an even number of characters AND the variant
/// considers itself particularly fun"; variants only decide the second half.
#[derive(Debug, Clone, PartialEq)]
pub enum Destination {
    City(City),
    Town(Town),
    SeasideResort(SeasideResort),
}

impl Destination {
    pub fn city(
        name: impl Into<String>,
        attraction_count: u32,
        population: u64,
        noise_level_db: f64,
    ) -> Result<Self, DomainError> {
        Ok(Destination::City(City {
            name: validated_name(name.into())?,
            attraction_count,
            population,
            noise_level_db,
        }))
    }

    pub fn town(
        name: impl Into<String>,
        province: impl Into<String>,
        founded: NaiveDate,
    ) -> Result<Self, DomainError> {
        Ok(Destination::Town(Town {
            name: validated_name(name.into())?,
            province: province.into(),
            founded,
        }))
    }

    pub fn seaside_resort(
        name: impl Into<String>,
        extension_meters: u32,
        dangerous_sea: bool,
        pedestrian_boardwalk: bool,
    ) -> Result<Self, DomainError> {
        Ok(Destination::SeasideResort(SeasideResort {
            name: validated_name(name.into())?,
            extension_meters,
            dangerous_sea,
            pedestrian_boardwalk,
        }))
    }

    pub fn name(&self) -> &str {
        match self {
            Destination::City(city) => &city.name,
            Destination::Town(town) => &town.name,
            Destination::SeasideResort(resort) => &resort.name,
        }
    }

    pub fn is_fun(&self) -> bool {
        self.has_even_name() && self.is_particularly_fun()
    }

    pub fn is_particularly_fun(&self) -> bool {
        match self {
            Destination::City(city) => city.is_particularly_fun(),
            Destination::Town(town) => town.is_particularly_fun(),
            Destination::SeasideResort(resort) => resort.is_particularly_fun(),
        }
    }

    pub fn is_calm(&self) -> bool {
        match self {
            Destination::City(city) => city.is_calm(),
            Destination::Town(town) => town.is_calm(),
            Destination::SeasideResort(resort) => resort.is_calm(),
        }
    }

    // Counted in characters, not bytes: "Paraná" has six.
    fn has_even_name(&self) -> bool {
        self.name().chars().count() % 2 == 0
    }
}

fn validated_name(name: String) -> Result<String, DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::EmptyDestinationName);
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_rosario_is_calm_and_particularly_fun_but_not_fun() {
        let rosario = Destination::city("Rosario", 5, 150_000, 15.0).unwrap();

        assert!(rosario.is_calm());
        assert!(rosario.is_particularly_fun());
        // Seven characters
        assert!(!rosario.is_fun());
    }

    #[test]
    fn test_parana_is_fun_and_not_calm() {
        let parana = Destination::town("Paraná", "Entre Ríos", date(1700, 1, 1)).unwrap();

        assert!(parana.is_particularly_fun());
        assert!(parana.is_fun());
        assert!(!parana.is_calm());
    }

    #[test_case(5, 150_000, true; "#1 many attractions and populated")]
    #[test_case(3, 150_000, false; "#2 attraction count must exceed three")]
    #[test_case(4, 100_000, false; "#3 population must exceed one hundred thousand")]
    #[test_case(0, 0, false; "#4 empty city")]
    fn test_city_particularly_fun(attractions: u32, population: u64, expected: bool) {
        let city = Destination::city("Mendoza", attractions, population, 30.0).unwrap();
        assert_eq!(city.is_particularly_fun(), expected);
    }

    #[test_case(19.9, true; "#1 below threshold")]
    #[test_case(20.0, false; "#2 threshold is not calm")]
    #[test_case(75.5, false; "#3 noisy")]
    fn test_city_calm(noise: f64, expected: bool) {
        let city = Destination::city("Salta", 1, 1, noise).unwrap();
        assert_eq!(city.is_calm(), expected);
    }

    #[test_case("Corrientes", 1799, true; "#1 old litoral town")]
    #[test_case("Misiones", 1800, false; "#2 founded on the cutoff year")]
    #[test_case("Córdoba", 1650, false; "#3 old but not litoral")]
    fn test_town_particularly_fun(province: &str, year: i32, expected: bool) {
        let town = Destination::town("Yapeyú", province, date(year, 1, 1)).unwrap();
        assert_eq!(town.is_particularly_fun(), expected);
    }

    #[test]
    fn test_town_calm_only_in_la_pampa() {
        let calm = Destination::town("Victorica", "La Pampa", date(1882, 5, 1)).unwrap();
        let busy = Destination::town("Tilcara", "Jujuy", date(1586, 7, 1)).unwrap();

        assert!(calm.is_calm());
        assert!(!busy.is_calm());
    }

    #[test_case(301, true, true; "#1 long and dangerous")]
    #[test_case(300, true, false; "#2 extension must exceed three hundred")]
    #[test_case(1200, false, false; "#3 safe sea")]
    fn test_seaside_particularly_fun(extension: u32, dangerous: bool, expected: bool) {
        let resort = Destination::seaside_resort("Pinamar", extension, dangerous, true).unwrap();
        assert_eq!(resort.is_particularly_fun(), expected);
    }

    #[test]
    fn test_seaside_calm_without_boardwalk() {
        let quiet = Destination::seaside_resort("Mar de las Pampas", 200, false, false).unwrap();
        let busy = Destination::seaside_resort("Mar del Plata", 8000, true, true).unwrap();

        assert!(quiet.is_calm());
        assert!(!busy.is_calm());
    }

    #[test]
    fn test_fun_requires_even_name_for_every_variant() {
        let destinations = vec![
            Destination::city("Córdoba", 10, 1_500_000, 60.0).unwrap(),
            Destination::city("Tucumán", 10, 900_000, 60.0).unwrap(),
            Destination::town("Esquina", "Corrientes", date(1750, 1, 1)).unwrap(),
            Destination::seaside_resort("Necochea", 900, true, true).unwrap(),
            Destination::seaside_resort("Villa Gesell", 100, false, true).unwrap(),
        ];

        for destination in destinations {
            let even = destination.name().chars().count() % 2 == 0;
            assert_eq!(
                destination.is_fun(),
                even && destination.is_particularly_fun(),
                "fun mismatch for {}",
                destination.name()
            );
        }
    }

    #[test]
    fn test_blank_name_is_rejected() {
        assert_eq!(
            Destination::city("  ", 1, 1, 1.0),
            Err(DomainError::EmptyDestinationName)
        );
        assert_eq!(
            Destination::seaside_resort("", 1, false, false),
            Err(DomainError::EmptyDestinationName)
        );
    }
}
