use super::grid::{wavefront, wavefront_sum};
use crate::{Assembly, ContinuousPoint, CostWeights};

use log::warn;

/// Exponents are clamped here so a single bad term saturates instead of overflowing to `inf`.
const MAX_EXPONENT: f64 = 700.0;

/// Measurements of an assembly that the cost is derived from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchProperties {
    /// The XY center of the lattice, at ground level.
    pub desired_com: ContinuousPoint,
    /// The mass-weighted center of the occupied voxels. Equal to `desired_com` when there is no
    /// mass.
    pub actual_com: ContinuousPoint,
    /// Number of lattice points in the bounding extent.
    pub volume: usize,
    /// Number of non-empty voxels.
    pub block_count: usize,
    pub total_mass: f64,
    /// Summed ground distance of every grounded voxel.
    pub wavefront: u64,
    /// Mass-weighted sum of squared heights above the ground layer.
    pub z_fill: f64,
}

impl SearchProperties {
    pub fn compute(assembly: &Assembly, half_mass: f64) -> Self {
        let lattice = assembly.lattice();
        let extent = lattice.bounding_extent();
        let center = extent.get_center();
        let ground_z = extent.get_minimum().z;
        let desired_com = ContinuousPoint::new(center.x, center.y, ground_z as f64);

        let mut weighted = ContinuousPoint::default();
        let mut total_mass = 0.0;
        let mut block_count = 0;
        let mut z_fill = 0.0;
        for (id, p) in lattice.iter() {
            let state = match assembly.field().state(id) {
                Some(s) => s,
                None => continue,
            };
            if state.is_empty() {
                continue;
            }
            let mass = state.mass(half_mass);
            let height = (p.z - ground_z) as f64;
            block_count += 1;
            total_mass += mass;
            weighted = weighted + p.to_continuous() * mass;
            z_fill += mass * height * height;
        }

        let actual_com = if total_mass > 0.0 {
            weighted * (1.0 / total_mass)
        } else {
            desired_com
        };

        Self {
            desired_com,
            actual_com,
            volume: extent.volume(),
            block_count,
            total_mass,
            wavefront: wavefront_sum(&wavefront(assembly)),
            z_fill,
        }
    }

    /// Lower is better. NaN costs are reported as `+inf`.
    pub fn cost(&self, weights: &CostWeights) -> f64 {
        let dx = self.actual_com.x - self.desired_com.x;
        let dy = self.actual_com.y - self.desired_com.y;
        let dz = self.actual_com.z - self.desired_com.z;
        let density = if self.volume == 0 {
            0.0
        } else {
            self.block_count as f64 / self.volume as f64
        };

        let cost = clamped_exp(weights.com_xy * (dx * dx + dy * dy))
            + clamped_exp(weights.com_z * dz * dz)
            + clamped_exp(-weights.density * density)
            + weights.z_fill * self.z_fill
            + weights.wavefront * self.wavefront as f64;

        if cost.is_nan() {
            warn!("cost of {:?} is NaN", self);
            return f64::INFINITY;
        }

        cost
    }
}

fn clamped_exp(x: f64) -> f64 {
    x.min(MAX_EXPONENT).exp()
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::filled_box;
    use crate::{BlockState, Extent};

    fn floor_box() -> Assembly {
        filled_box(Extent::from_min_and_local_supremum(
            [0, 0, 0].into(),
            [3, 3, 3].into(),
        ))
    }

    #[test]
    fn test_empty_assembly_has_desired_com() {
        let props = SearchProperties::compute(&floor_box(), 0.5);

        assert_eq!(props.desired_com, ContinuousPoint::new(1.0, 1.0, 0.0));
        assert_eq!(props.actual_com, props.desired_com);
        assert_eq!(props.volume, 27);
        assert_eq!(props.block_count, 0);
        assert_eq!(props.total_mass, 0.0);
        assert_eq!(props.wavefront, 0);
    }

    #[test]
    fn test_properties_of_a_column() {
        let mut assembly = floor_box();
        assembly
            .set_block_state(&[1, 1, 0].into(), BlockState::Full)
            .unwrap();
        assembly
            .set_block_state(&[1, 1, 1].into(), BlockState::Full)
            .unwrap();
        assembly
            .set_block_state(&[1, 1, 2].into(), BlockState::Half)
            .unwrap();

        let props = SearchProperties::compute(&assembly, 0.5);
        assert_eq!(props.block_count, 3);
        assert_eq!(props.total_mass, 2.5);
        assert_eq!(props.z_fill, 1.0 + 0.5 * 4.0);
        assert_eq!(props.wavefront, 3);
        assert!((props.actual_com.x - 1.0).abs() < 1e-12);
        assert!((props.actual_com.z - 2.0 / 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_centered_beats_off_center() {
        let weights = CostWeights::default();

        let mut centered = floor_box();
        centered
            .set_block_state(&[1, 1, 0].into(), BlockState::Full)
            .unwrap();
        let mut corner = floor_box();
        corner
            .set_block_state(&[0, 0, 0].into(), BlockState::Full)
            .unwrap();

        let a = SearchProperties::compute(&centered, 0.5).cost(&weights);
        let b = SearchProperties::compute(&corner, 0.5).cost(&weights);
        assert!(a < b);
    }

    #[test]
    fn test_huge_deviation_saturates() {
        let props = SearchProperties {
            desired_com: ContinuousPoint::new(0.0, 0.0, 0.0),
            actual_com: ContinuousPoint::new(1e6, 0.0, 0.0),
            volume: 1,
            block_count: 1,
            total_mass: 1.0,
            wavefront: 0,
            z_fill: 0.0,
        };

        assert!(props.cost(&CostWeights::default()).is_finite());
    }

    #[test]
    fn test_nan_cost_is_infinite() {
        let props = SearchProperties {
            desired_com: ContinuousPoint::new(0.0, 0.0, 0.0),
            actual_com: ContinuousPoint::new(0.0, 0.0, 0.0),
            volume: 1,
            block_count: 1,
            total_mass: 1.0,
            wavefront: 0,
            z_fill: f64::NAN,
        };

        assert_eq!(props.cost(&CostWeights::default()), f64::INFINITY);
    }
}
