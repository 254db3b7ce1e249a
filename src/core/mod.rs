pub mod arg_segmenter;
pub mod char_util;
pub mod resolver;
pub mod split;
