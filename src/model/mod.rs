/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 25/8/26
******************************************************************************/
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
