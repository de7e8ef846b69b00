/// UI layer: panel widgets and the 3D scene renderer.

pub mod panels;
pub mod scene;
