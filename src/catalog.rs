// Tour catalog loading: JSON records converted into validated tour drafts

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::destination::Destination;
use crate::error::DomainError;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid tour at position {index}: {source}")]
    InvalidTour {
        index: usize,
        #[source]
        source: DomainError,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

// Data structures for the catalog JSON
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    pub tours: Vec<CatalogTour>,
}

#[derive(Debug, Deserialize)]
pub struct CatalogTour {
    pub departure: NaiveDate,
    pub required_headcount: u32,
    pub cost_per_person: u32,
    pub destinations: Vec<CatalogDestination>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogDestination {
    City {
        name: String,
        attraction_count: u32,
        population: u64,
        noise_level_db: f64,
    },
    Town {
        name: String,
        province: String,
        founded: NaiveDate,
    },
    SeasideResort {
        name: String,
        extension_meters: u32,
        #[serde(default)]
        dangerous_sea: bool,
        #[serde(default)]
        pedestrian_boardwalk: bool,
    },
}

impl TryFrom<CatalogDestination> for Destination {
    type Error = DomainError;

    fn try_from(item: CatalogDestination) -> Result<Self, Self::Error> {
        match item {
            CatalogDestination::City {
                name,
                attraction_count,
                population,
                noise_level_db,
            } => Destination::city(name, attraction_count, population, noise_level_db),
            CatalogDestination::Town {
                name,
                province,
                founded,
            } => Destination::town(name, province, founded),
            CatalogDestination::SeasideResort {
                name,
                extension_meters,
                dangerous_sea,
                pedestrian_boardwalk,
            } => Destination::seaside_resort(
                name,
                extension_meters,
                dangerous_sea,
                pedestrian_boardwalk,
            ),
        }
    }
}

/// A validated tour, ready to be opened by the agency.
#[derive(Debug, Clone, PartialEq)]
pub struct TourDraft {
    pub departure: NaiveDate,
    pub required_headcount: u32,
    pub destinations: Vec<Destination>,
    pub cost_per_person: u32,
}

impl TryFrom<CatalogTour> for TourDraft {
    type Error = DomainError;

    fn try_from(item: CatalogTour) -> Result<Self, Self::Error> {
        if item.required_headcount == 0 {
            return Err(DomainError::ZeroHeadcount);
        }
        if item.destinations.is_empty() {
            return Err(DomainError::NoDestinations);
        }

        let destinations = item
            .destinations
            .into_iter()
            .map(Destination::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TourDraft {
            departure: item.departure,
            required_headcount: item.required_headcount,
            destinations,
            cost_per_person: item.cost_per_person,
        })
    }
}

/// Parses a catalog and validates every entry; the first invalid entry fails the whole catalog.
pub fn parse_catalog(json: &str) -> Result<Vec<TourDraft>, CatalogError> {
    let file: CatalogFile = serde_json::from_str(json)?;
    file.tours
        .into_iter()
        .enumerate()
        .map(|(index, tour)| {
            TourDraft::try_from(tour).map_err(|source| CatalogError::InvalidTour { index, source })
        })
        .collect()
}

pub fn read_catalog(path: impl AsRef<Path>) -> Result<String, CatalogError> {
    Ok(std::fs::read_to_string(path)?)
}

// Sample file paths (the actual files are stored in the samples directory)
pub const SAMPLE_CATALOG_PATH: &str = "samples/tour_catalog.json";
