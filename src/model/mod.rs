/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Request models and query parameter builders
pub mod requests;
/// Response models returned by the account endpoints
pub mod responses;
