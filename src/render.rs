pub mod renderer;
pub mod storyboard;
