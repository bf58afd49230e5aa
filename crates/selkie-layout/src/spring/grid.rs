//! Fixed spatial partition for bounded-range repulsion.
//!
//! The plane is split into `count × count` square regions of side `size`, centred on the origin,
//! plus one outer region collecting every point beyond the grid (and non-finite points). Regions
//! hold indices into the caller's flat position slice. Two points closer than `size` always sit
//! in the same or adjacent regions, where the outer region is adjacent to itself and to every
//! border region.

use crate::geom::Point;

#[derive(Debug, Clone)]
pub(crate) struct RegionGrid {
    count: usize,
    size: f64,
    half_extent: f64,
    /// Regions adjacent to each region (itself included). Computed once per grid shape.
    adjacent: Vec<Vec<usize>>,
    members: Vec<Vec<usize>>,
    region_of_point: Vec<usize>,
}

impl RegionGrid {
    pub(crate) fn new(count: usize, size: f64) -> Self {
        let count = count.max(1);
        let regions = count * count + 1;
        let outer = count * count;

        let mut adjacent: Vec<Vec<usize>> = vec![Vec::new(); regions];
        for cx in 0..count {
            for cy in 0..count {
                let r = cx * count + cy;
                for nx in cx.saturating_sub(1)..=(cx + 1).min(count - 1) {
                    for ny in cy.saturating_sub(1)..=(cy + 1).min(count - 1) {
                        adjacent[r].push(nx * count + ny);
                    }
                }
                let border = cx == 0 || cy == 0 || cx == count - 1 || cy == count - 1;
                if border {
                    adjacent[r].push(outer);
                    adjacent[outer].push(r);
                }
            }
        }
        adjacent[outer].push(outer);

        Self {
            count,
            size,
            half_extent: count as f64 * size / 2.0,
            adjacent,
            members: vec![Vec::new(); regions],
            region_of_point: Vec::new(),
        }
    }

    /// Whether this grid was built for the given shape.
    pub(crate) fn matches(&self, count: usize, size: f64) -> bool {
        self.count == count.max(1) && self.size == size
    }

    pub(crate) fn outer(&self) -> usize {
        self.count * self.count
    }

    pub(crate) fn region_of(&self, p: Point) -> usize {
        let gx = ((p.x + self.half_extent) / self.size).floor();
        let gy = ((p.y + self.half_extent) / self.size).floor();
        let limit = self.count as f64;
        if !(gx >= 0.0 && gx < limit && gy >= 0.0 && gy < limit) {
            return self.outer();
        }
        (gx as usize) * self.count + (gy as usize)
    }

    /// Reassigns every position to its region.
    pub(crate) fn assign(&mut self, positions: &[Point]) {
        for m in &mut self.members {
            m.clear();
        }
        self.region_of_point.clear();
        self.region_of_point.reserve(positions.len());
        for (i, &p) in positions.iter().enumerate() {
            let r = self.region_of(p);
            self.members[r].push(i);
            self.region_of_point.push(r);
        }
    }

    /// Every point in a region adjacent to point `i`'s region, `i` included.
    pub(crate) fn candidates(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        let region = self.region_of_point.get(i).copied().unwrap_or(self.outer());
        self.adjacent[region]
            .iter()
            .flat_map(move |&r| self.members[r].iter().copied())
    }

    pub(crate) fn occupied_regions(&self) -> usize {
        self.members.iter().filter(|m| !m.is_empty()).count()
    }
}
