mod test_concurrent_offers;
mod test_presenter_scenario;
mod test_renegotiation;
