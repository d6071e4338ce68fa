mod into_chain_error;
