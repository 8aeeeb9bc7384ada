
#[cfg(test)]
mod data_grid_tests;

#[cfg(test)]
mod filter_bar_tests;

#[cfg(test)]
mod pagination_tests;

#[cfg(test)]
mod client_mode_tests;

#[cfg(test)]
mod interaction_tests;
