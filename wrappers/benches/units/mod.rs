pub mod basic_mapx;
pub mod basic_mapx_list;
pub mod concurrent;
