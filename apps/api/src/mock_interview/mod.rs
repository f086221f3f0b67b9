// Live voice mock interview: token-gated SDP relay to the realtime provider.
// The audio/data channel itself runs browser <-> provider; only the offer/answer
// exchange passes through this service.

pub mod handlers;
pub mod relay;
