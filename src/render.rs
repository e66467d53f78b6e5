//! Geometry descriptions for an external renderer.
//!
//! Nothing here draws. `AssemblyVisualizer` turns an assembly into an ordered list of
//! `RenderRequest`s that a viewer can consume on its own schedule.

use crate::{Assembly, BlockState, ContinuousPoint, SearchProperties};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);

    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Representation {
    Points,
    Wireframe,
    Surface,
}

/// Appearance shared by every kind of geometry.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Style {
    /// Identifies the request's target within one visualization.
    pub id: u32,
    pub color: Color,
    pub representation: Representation,
    pub use_lighting: bool,
    /// 1.0 is opaque, 0.0 is transparent.
    pub opacity: f64,
    pub show_edges: bool,
    pub edge_color: Color,
}

impl Style {
    pub fn new(id: u32, color: Color) -> Self {
        Self {
            id,
            color,
            representation: Representation::Surface,
            use_lighting: true,
            opacity: 1.0,
            show_edges: false,
            edge_color: Color::BLACK,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum RenderRequest {
    /// Remove everything previously drawn.
    Clear,
    Cube {
        style: Style,
        center: ContinuousPoint,
        lengths: [f64; 3],
    },
    Line {
        style: Style,
        start: ContinuousPoint,
        finish: ContinuousPoint,
    },
    Plane {
        style: Style,
        center: ContinuousPoint,
        lengths: [f64; 2],
        normal: ContinuousPoint,
    },
    Arrow {
        style: Style,
        start: ContinuousPoint,
        finish: ContinuousPoint,
    },
}

#[derive(Clone, Copy, Debug, Default)]
pub struct AssemblyVisualizer {
    half_mass: f64,
}

impl AssemblyVisualizer {
    /// `half_mass` is only used for the center of mass arrow.
    pub fn new(half_mass: f64) -> Self {
        Self { half_mass }
    }

    /// A `Clear` followed by one unit cube per lattice node over the bounding extent, in raster
    /// order. Empty voxels are black wireframes; half and full blocks are blue at half and full
    /// opacity.
    pub fn visualize(&self, assembly: &Assembly) -> Vec<RenderRequest> {
        let cubes = assembly
            .lattice()
            .bounding_extent()
            .into_iter()
            .filter_map(|p| assembly.block_state_at(&p).map(|state| (p, state)))
            .enumerate()
            .map(|(i, (p, state))| cube_request(i as u32, p.to_continuous(), state))
            .collect_vec();

        let mut requests = Vec::with_capacity(cubes.len() + 1);
        requests.push(RenderRequest::Clear);
        requests.extend(cubes);

        requests
    }

    /// Everything `visualize` emits plus an arrow from the desired to the actual center of mass.
    pub fn visualize_with_center_of_mass(&self, assembly: &Assembly) -> Vec<RenderRequest> {
        let mut requests = self.visualize(assembly);
        let props = SearchProperties::compute(assembly, self.half_mass);
        let id = requests.len() as u32 - 1;
        requests.push(RenderRequest::Arrow {
            style: Style::new(id, Color::RED),
            start: props.desired_com,
            finish: props.actual_com,
        });

        requests
    }
}

fn cube_request(id: u32, center: ContinuousPoint, state: BlockState) -> RenderRequest {
    let mut style = Style::new(id, Color::BLUE);
    style.show_edges = true;
    match state {
        BlockState::Empty => {
            style.color = Color::BLACK;
            style.representation = Representation::Wireframe;
        }
        BlockState::Half => style.opacity = 0.5,
        BlockState::Full => style.opacity = 1.0,
    }

    RenderRequest::Cube {
        style,
        center,
        lengths: [1.0; 3],
    }
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
    use crate::Extent;

    #[test]
    fn test_one_cube_per_voxel_after_clear() {
        let mut assembly = filled_box(Extent::from_min_and_local_supremum(
            [0, 0, 0].into(),
            [2, 1, 1].into(),
        ));
        assembly
            .set_block_state(&[1, 0, 0].into(), BlockState::Half)
            .unwrap();

        let requests = AssemblyVisualizer::default().visualize(&assembly);
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0], RenderRequest::Clear);

        match &requests[1] {
            RenderRequest::Cube { style, center, .. } => {
                assert_eq!(style.id, 0);
                assert_eq!(style.representation, Representation::Wireframe);
                assert_eq!(style.color, Color::BLACK);
                assert_eq!(*center, ContinuousPoint::new(0.0, 0.0, 0.0));
            }
            other => panic!("unexpected request {:?}", other),
        }
        match &requests[2] {
            RenderRequest::Cube { style, center, .. } => {
                assert_eq!(style.id, 1);
                assert_eq!(style.opacity, 0.5);
                assert_eq!(style.color, Color::BLUE);
                assert_eq!(*center, ContinuousPoint::new(1.0, 0.0, 0.0));
            }
            other => panic!("unexpected request {:?}", other),
        }
    }

    #[test]
    fn test_center_of_mass_arrow() {
        let mut assembly = filled_box(Extent::from_min_and_local_supremum(
            [0, 0, 0].into(),
            [3, 1, 2].into(),
        ));
        assembly
            .set_block_state(&[0, 0, 0].into(), BlockState::Full)
            .unwrap();

        let requests = AssemblyVisualizer::new(0.5).visualize_with_center_of_mass(&assembly);
        assert_eq!(requests.len(), 1 + 6 + 1);
        match requests.last() {
            Some(RenderRequest::Arrow { start, finish, .. }) => {
                assert_eq!(*start, ContinuousPoint::new(1.0, 0.0, 0.0));
                assert_eq!(*finish, ContinuousPoint::new(0.0, 0.0, 0.0));
            }
            other => panic!("unexpected request {:?}", other),
        }
    }
}
