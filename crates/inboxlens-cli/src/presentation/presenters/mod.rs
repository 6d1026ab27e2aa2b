mod copy;
mod results;
mod tier;

pub use copy::present_copy;
pub use results::{
    BACK_LABEL, PRIMARY_REQUEST_TITLE, REQUEST_TYPE_TITLE, SUB_REQUEST_TYPE_TITLE, TITLE,
    build_results, present_confidence, present_results,
};
pub use tier::present_tier;
