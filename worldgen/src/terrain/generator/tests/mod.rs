mod heightmap_tests;
mod noise_tests;
