mod secret_leakage;
