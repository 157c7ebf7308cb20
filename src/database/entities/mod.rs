pub mod wilders;
