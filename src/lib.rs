pub mod configuration;

pub mod function {
    pub mod function;
    pub mod functionerror;
    pub mod polynomialfunction;
    pub mod cubicsplinefunction;
    pub mod leastsquaresfunction;
}

pub mod geometry {
    pub mod point;
    pub mod vector;
    pub mod pointset;
    pub mod pointseterror;
}

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}
