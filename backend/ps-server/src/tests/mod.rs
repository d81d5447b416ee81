mod currency;
