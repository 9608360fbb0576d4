pub mod ctq_sf;
