// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::SourceError;
use award_finder_domain::{
    AirlineProgram, AirlineRoute, Airport, AirportRegionMapping, Alliance, AwardChart,
    CreditCardProgram, Region, TransferPartnership,
};

/// Read-only access to the seeded reference tables.
///
/// Each method returns every row of one table in the store's enumeration
/// order. That order is observable: it decides metro membership order,
/// first-match chart selection and transfer option order.
///
/// Methods take `&mut self` because database connections require exclusive
/// access to issue queries.
pub trait ReferenceSource {
    /// Lists all airports.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_airports(&mut self) -> Result<Vec<Airport>, SourceError>;

    /// Lists all alliances.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_alliances(&mut self) -> Result<Vec<Alliance>, SourceError>;

    /// Lists all airline loyalty programs.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_airline_programs(&mut self) -> Result<Vec<AirlineProgram>, SourceError>;

    /// Lists all program regions.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_regions(&mut self) -> Result<Vec<Region>, SourceError>;

    /// Lists all airport to region mappings.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_region_mappings(&mut self) -> Result<Vec<AirportRegionMapping>, SourceError>;

    /// Lists all award chart rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_award_charts(&mut self) -> Result<Vec<AwardChart>, SourceError>;

    /// Lists all directed airline routes.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_routes(&mut self) -> Result<Vec<AirlineRoute>, SourceError>;

    /// Lists all credit card programs.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_card_programs(&mut self) -> Result<Vec<CreditCardProgram>, SourceError>;

    /// Lists all transfer partnerships.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_partnerships(&mut self) -> Result<Vec<TransferPartnership>, SourceError>;
}

/// Every reference table, fully materialized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceSnapshot {
    pub airports: Vec<Airport>,
    pub alliances: Vec<Alliance>,
    pub programs: Vec<AirlineProgram>,
    pub regions: Vec<Region>,
    pub region_mappings: Vec<AirportRegionMapping>,
    pub award_charts: Vec<AwardChart>,
    pub routes: Vec<AirlineRoute>,
    pub card_programs: Vec<CreditCardProgram>,
    pub partnerships: Vec<TransferPartnership>,
}

impl ReferenceSnapshot {
    /// Reads every table from `source` once.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by the source.
    pub fn load<S: ReferenceSource + ?Sized>(source: &mut S) -> Result<Self, SourceError> {
        Ok(Self {
            airports: source.list_airports()?,
            alliances: source.list_alliances()?,
            programs: source.list_airline_programs()?,
            regions: source.list_regions()?,
            region_mappings: source.list_region_mappings()?,
            award_charts: source.list_award_charts()?,
            routes: source.list_routes()?,
            card_programs: source.list_card_programs()?,
            partnerships: source.list_partnerships()?,
        })
    }
}

/// A snapshot serves as an in-memory store.
impl ReferenceSource for ReferenceSnapshot {
    fn list_airports(&mut self) -> Result<Vec<Airport>, SourceError> {
        Ok(self.airports.clone())
    }

    fn list_alliances(&mut self) -> Result<Vec<Alliance>, SourceError> {
        Ok(self.alliances.clone())
    }

    fn list_airline_programs(&mut self) -> Result<Vec<AirlineProgram>, SourceError> {
        Ok(self.programs.clone())
    }

    fn list_regions(&mut self) -> Result<Vec<Region>, SourceError> {
        Ok(self.regions.clone())
    }

    fn list_region_mappings(&mut self) -> Result<Vec<AirportRegionMapping>, SourceError> {
        Ok(self.region_mappings.clone())
    }

    fn list_award_charts(&mut self) -> Result<Vec<AwardChart>, SourceError> {
        Ok(self.award_charts.clone())
    }

    fn list_routes(&mut self) -> Result<Vec<AirlineRoute>, SourceError> {
        Ok(self.routes.clone())
    }

    fn list_card_programs(&mut self) -> Result<Vec<CreditCardProgram>, SourceError> {
        Ok(self.card_programs.clone())
    }

    fn list_partnerships(&mut self) -> Result<Vec<TransferPartnership>, SourceError> {
        Ok(self.partnerships.clone())
    }
}
