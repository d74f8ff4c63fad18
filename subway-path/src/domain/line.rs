//! Lines and the sections they are made of.

use std::collections::{HashMap, HashSet};

use super::{Distance, DomainError, Station, StationId};

/// A single traversable link between two adjacent stations on a line.
///
/// Invariants: the two stations differ and the distance is positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    up: Station,
    down: Station,
    distance: Distance,
}

impl Section {
    /// Create a section running from `up` to `down`.
    pub fn new(up: Station, down: Station, distance: Distance) -> Result<Self, DomainError> {
        if up.id() == down.id() {
            return Err(DomainError::SelfLoop(up.id()));
        }
        if distance.is_zero() {
            return Err(DomainError::NonPositiveDistance {
                up: up.id(),
                down: down.id(),
            });
        }
        Ok(Self { up, down, distance })
    }

    pub fn up(&self) -> &Station {
        &self.up
    }

    pub fn down(&self) -> &Station {
        &self.down
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }
}

/// A named line: an unbranched chain of sections.
///
/// Sections may be supplied in any order; the chain order (up terminus to
/// down terminus) is worked out once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    name: String,
    sections: Vec<Section>,
    /// Indices into `sections`, ordered from the up terminus.
    chain: Vec<usize>,
}

impl Line {
    /// Create a line, validating that its sections link into one chain.
    pub fn new(name: impl Into<String>, sections: Vec<Section>) -> Result<Self, DomainError> {
        let name = name.into();
        let chain = chain_order(&name, &sections)?;
        Ok(Self {
            name,
            sections,
            chain,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sections in the order they were supplied.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Sections ordered from the up terminus to the down terminus.
    pub fn ordered_sections(&self) -> impl Iterator<Item = &Section> + '_ {
        self.chain.iter().map(|&i| &self.sections[i])
    }

    /// The first station of the line: the one no section arrives at.
    pub fn up_terminus(&self) -> &Station {
        self.sections[self.chain[0]].up()
    }

    /// The last station of the line.
    pub fn down_terminus(&self) -> &Station {
        self.sections[self.chain[self.chain.len() - 1]].down()
    }

    /// All stations of the line, from up terminus to down terminus.
    pub fn stations(&self) -> Vec<&Station> {
        let mut stations = Vec::with_capacity(self.sections.len() + 1);
        stations.push(self.up_terminus());
        stations.extend(self.ordered_sections().map(Section::down));
        stations
    }

    /// Sum of all section distances.
    pub fn total_distance(&self) -> Distance {
        self.sections.iter().map(Section::distance).sum()
    }
}

/// Work out the up-to-down order of `sections`, rejecting anything that is
/// not a single unbranched chain.
fn chain_order(line: &str, sections: &[Section]) -> Result<Vec<usize>, DomainError> {
    let broken = |reason| DomainError::BrokenChain {
        line: line.to_string(),
        reason,
    };

    if sections.is_empty() {
        return Err(DomainError::EmptyLine(line.to_string()));
    }

    let mut by_up: HashMap<StationId, usize> = HashMap::with_capacity(sections.len());
    let mut downs: HashSet<StationId> = HashSet::with_capacity(sections.len());
    for (i, section) in sections.iter().enumerate() {
        if by_up.insert(section.up().id(), i).is_some() {
            return Err(broken("a station starts more than one section"));
        }
        if !downs.insert(section.down().id()) {
            return Err(broken("a station ends more than one section"));
        }
    }

    let head = sections
        .iter()
        .position(|s| !downs.contains(&s.up().id()))
        .ok_or_else(|| broken("sections form a loop"))?;

    let mut chain = Vec::with_capacity(sections.len());
    let mut next = Some(head);
    while let Some(i) = next {
        chain.push(i);
        next = by_up.get(&sections[i].down().id()).copied();
        if chain.len() > sections.len() {
            return Err(broken("sections form a loop"));
        }
    }

    if chain.len() != sections.len() {
        return Err(broken("sections are not connected"));
    }

    Ok(chain)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn chain(len: usize, distances: &[u64]) -> Vec<Section> {
        (0..len)
            .map(|i| {
                let up = Station::new(StationId::new(i as u64), format!("S{i}")).unwrap();
                let down = Station::new(StationId::new(i as u64 + 1), format!("S{}", i + 1)).unwrap();
                Section::new(up, down, Distance::new(distances[i])).unwrap()
            })
            .collect()
    }

    proptest! {
        /// Any permutation of a valid chain yields the same ordered stations
        #[test]
        fn order_independent_of_supply_order(
            distances in prop::collection::vec(1u64..100, 1..12),
            seed in any::<u64>(),
        ) {
            let len = distances.len();
            let mut sections = chain(len, &distances);

            // Deterministic shuffle driven by the seed
            let mut state = seed;
            for i in (1..len).rev() {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                let j = (state >> 33) as usize % (i + 1);
                sections.swap(i, j);
            }

            let line = Line::new("Shuffled", sections).unwrap();
            let stations: Vec<u64> = line.stations().iter().map(|s| s.id().get()).collect();
            let expected: Vec<u64> = (0..=len as u64).collect();
            prop_assert_eq!(stations, expected);
            prop_assert_eq!(line.total_distance().get(), distances.iter().sum::<u64>());
        }
    }
}
