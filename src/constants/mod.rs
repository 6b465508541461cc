pub mod lcg_params;
